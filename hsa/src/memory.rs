use crate::agent::Agent;
use crate::error::{hsa_check, HsaResult};
use hsa_sys::bindings::{
    hsa_agent_iterate_regions, hsa_agent_t, hsa_amd_agent_iterate_memory_pools,
    hsa_amd_agent_memory_pool_get_info,
    hsa_amd_agent_memory_pool_info_t_HSA_AMD_AGENT_MEMORY_POOL_INFO_LINK_INFO,
    hsa_amd_agent_memory_pool_info_t_HSA_AMD_AGENT_MEMORY_POOL_INFO_NUM_LINK_HOPS,
    hsa_amd_link_info_type_t, hsa_amd_memory_pool_get_info,
    hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_COARSE_GRAINED,
    hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_FINE_GRAINED,
    hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_KERNARG_INIT,
    hsa_amd_memory_pool_info_t, hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_GLOBAL_FLAGS,
    hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_RUNTIME_ALLOC_ALLOWED,
    hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_RUNTIME_ALLOC_GRANULE,
    hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_SEGMENT,
    hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_SIZE, hsa_amd_memory_pool_link_info_t,
    hsa_amd_memory_pool_t, hsa_amd_segment_t, hsa_amd_segment_t_HSA_AMD_SEGMENT_GLOBAL,
    hsa_amd_region_info_s_HSA_AMD_REGION_INFO_HOST_ACCESSIBLE, hsa_region_get_info,
    hsa_region_info_t, hsa_region_info_t_HSA_REGION_INFO_SEGMENT,
    hsa_region_info_t_HSA_REGION_INFO_SIZE, hsa_region_segment_t,
    hsa_region_segment_t_HSA_REGION_SEGMENT_GLOBAL, hsa_region_segment_t_HSA_REGION_SEGMENT_GROUP,
    hsa_region_segment_t_HSA_REGION_SEGMENT_KERNARG,
    hsa_region_segment_t_HSA_REGION_SEGMENT_PRIVATE,
    hsa_region_segment_t_HSA_REGION_SEGMENT_READONLY, hsa_region_t, hsa_status_t,
    hsa_status_t_HSA_STATUS_SUCCESS,
};
use hsa_sys::utils::get_link_type_str;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionSegment {
    Global,
    ReadOnly,
    Private,
    Group,
    KernArg,
    Other,
}

impl RegionSegment {
    pub fn from_raw(raw: hsa_region_segment_t) -> Self {
        match raw {
            hsa_region_segment_t_HSA_REGION_SEGMENT_GLOBAL => Self::Global,
            hsa_region_segment_t_HSA_REGION_SEGMENT_READONLY => Self::ReadOnly,
            hsa_region_segment_t_HSA_REGION_SEGMENT_PRIVATE => Self::Private,
            hsa_region_segment_t_HSA_REGION_SEGMENT_GROUP => Self::Group,
            hsa_region_segment_t_HSA_REGION_SEGMENT_KERNARG => Self::KernArg,
            _ => Self::Other,
        }
    }

    /// Display name of a memory bank. Global banks split on whether the
    /// host can address them.
    pub fn label(&self, host_accessible: bool) -> &'static str {
        match self {
            Self::Global => {
                if host_accessible {
                    "System"
                } else {
                    "FrameBuffer (VRAM)"
                }
            }
            Self::Group => "LDS (Group)",
            Self::Private => "Scratch (Private)",
            Self::ReadOnly => "Constant (ReadOnly)",
            _ => "Unknown",
        }
    }
}

unsafe extern "C" fn collect_regions(
    region: hsa_region_t,
    data: *mut std::os::raw::c_void,
) -> hsa_status_t {
    let handles = &mut *(data as *mut Vec<hsa_region_t>);
    handles.push(region);

    hsa_status_t_HSA_STATUS_SUCCESS
}

#[derive(Debug, Clone)]
pub struct Region {
    region: hsa_region_t,
}

impl Region {
    pub(crate) fn collect(agent: hsa_agent_t) -> HsaResult<Vec<Region>> {
        let mut handles: Vec<hsa_region_t> = Vec::new();

        let ret = unsafe {
            hsa_agent_iterate_regions(
                agent,
                Some(collect_regions),
                &mut handles as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(handles
            .into_iter()
            .map(|region| Region { region })
            .collect())
    }

    pub fn get_hsa_region_t(&self) -> hsa_region_t {
        self.region
    }

    fn info_raw<T: Default>(&self, attribute: hsa_region_info_t) -> HsaResult<T> {
        let mut value = T::default();

        let ret = unsafe {
            hsa_region_get_info(
                self.region,
                attribute,
                &mut value as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(value)
    }

    pub fn segment(&self) -> HsaResult<RegionSegment> {
        Ok(RegionSegment::from_raw(
            self.info_raw::<hsa_region_segment_t>(hsa_region_info_t_HSA_REGION_INFO_SEGMENT)?,
        ))
    }

    pub fn size(&self) -> HsaResult<usize> {
        self.info_raw(hsa_region_info_t_HSA_REGION_INFO_SIZE)
    }

    /// Whether the host can address the region directly (AMD extension).
    pub fn host_accessible(&self) -> HsaResult<bool> {
        self.info_raw(hsa_amd_region_info_s_HSA_AMD_REGION_INFO_HOST_ACCESSIBLE)
    }
}

/// Decoded HSA_AMD_MEMORY_POOL_INFO_GLOBAL_FLAGS bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolFlags {
    pub fine_grained: bool,
    pub coarse_grained: bool,
    pub kernarg_init: bool,
}

impl PoolFlags {
    pub fn from_bits(flags: u32) -> Self {
        Self {
            fine_grained: flags
                & hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_FINE_GRAINED
                != 0,
            coarse_grained: flags
                & hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_COARSE_GRAINED
                != 0,
            kernarg_init: flags
                & hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_KERNARG_INIT
                != 0,
        }
    }

    pub fn describe(&self) -> String {
        let mut parts = Vec::new();

        if self.fine_grained {
            parts.push("Fine Grained");
        }
        if self.coarse_grained {
            parts.push("Coarse Grained");
        }
        if self.kernarg_init {
            parts.push("KernArg");
        }

        if parts.is_empty() {
            "None".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// First hop of the path from an agent to a peer pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkInfo {
    pub hops: u32,
    pub link_type: hsa_amd_link_info_type_t,
    pub min_bandwidth: u32,
    pub max_bandwidth: u32,
    pub numa_distance: u32,
}

impl LinkInfo {
    pub fn link_type_str(&self) -> &'static str {
        get_link_type_str(self.link_type)
    }
}

unsafe extern "C" fn collect_memory_pools(
    memory_pool: hsa_amd_memory_pool_t,
    data: *mut std::os::raw::c_void,
) -> hsa_status_t {
    let handles = &mut *(data as *mut Vec<hsa_amd_memory_pool_t>);
    handles.push(memory_pool);

    hsa_status_t_HSA_STATUS_SUCCESS
}

#[derive(Debug, Clone)]
pub struct MemoryPool {
    pool: hsa_amd_memory_pool_t,
}

impl MemoryPool {
    pub(crate) fn collect(agent: hsa_agent_t) -> HsaResult<Vec<MemoryPool>> {
        let mut handles: Vec<hsa_amd_memory_pool_t> = Vec::new();

        let ret = unsafe {
            hsa_amd_agent_iterate_memory_pools(
                agent,
                Some(collect_memory_pools),
                &mut handles as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(handles.into_iter().map(|pool| MemoryPool { pool }).collect())
    }

    pub fn get_hsa_amd_memory_pool_t(&self) -> hsa_amd_memory_pool_t {
        self.pool
    }

    fn info_raw<T: Default>(&self, attribute: hsa_amd_memory_pool_info_t) -> HsaResult<T> {
        let mut value = T::default();

        let ret = unsafe {
            hsa_amd_memory_pool_get_info(
                self.pool,
                attribute,
                &mut value as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(value)
    }

    pub fn is_global(&self) -> HsaResult<bool> {
        let segment: hsa_amd_segment_t =
            self.info_raw(hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_SEGMENT)?;

        Ok(segment == hsa_amd_segment_t_HSA_AMD_SEGMENT_GLOBAL)
    }

    pub fn global_flags(&self) -> HsaResult<PoolFlags> {
        Ok(PoolFlags::from_bits(self.info_raw(
            hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_GLOBAL_FLAGS,
        )?))
    }

    pub fn size(&self) -> HsaResult<usize> {
        self.info_raw(hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_SIZE)
    }

    pub fn alloc_allowed(&self) -> HsaResult<bool> {
        self.info_raw(hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_RUNTIME_ALLOC_ALLOWED)
    }

    pub fn alloc_granule(&self) -> HsaResult<usize> {
        self.info_raw(hsa_amd_memory_pool_info_t_HSA_AMD_MEMORY_POOL_INFO_RUNTIME_ALLOC_GRANULE)
    }

    /// Path from `agent` to this pool. `None` when the runtime reports no
    /// hops, which it does for an agent's own local pools.
    pub fn link_from(&self, agent: &Agent) -> HsaResult<Option<LinkInfo>> {
        let mut hops: u32 = 0;

        let ret = unsafe {
            hsa_amd_agent_memory_pool_get_info(
                agent.get_hsa_agent_t(),
                self.pool,
                hsa_amd_agent_memory_pool_info_t_HSA_AMD_AGENT_MEMORY_POOL_INFO_NUM_LINK_HOPS,
                &mut hops as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        if hops == 0 {
            return Ok(None);
        }

        // One entry per hop, the runtime fills the whole array
        let mut infos: Vec<hsa_amd_memory_pool_link_info_t> =
            vec![Default::default(); hops as usize];

        let ret = unsafe {
            hsa_amd_agent_memory_pool_get_info(
                agent.get_hsa_agent_t(),
                self.pool,
                hsa_amd_agent_memory_pool_info_t_HSA_AMD_AGENT_MEMORY_POOL_INFO_LINK_INFO,
                infos.as_mut_ptr() as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        let first = infos[0];

        Ok(Some(LinkInfo {
            hops,
            link_type: first.link_type,
            min_bandwidth: first.min_bandwidth,
            max_bandwidth: first.max_bandwidth,
            numa_distance: first.numa_distance,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_labels() {
        assert_eq!(RegionSegment::Global.label(true), "System");
        assert_eq!(RegionSegment::Global.label(false), "FrameBuffer (VRAM)");
        assert_eq!(RegionSegment::Group.label(false), "LDS (Group)");
        assert_eq!(RegionSegment::Private.label(false), "Scratch (Private)");
        assert_eq!(RegionSegment::ReadOnly.label(false), "Constant (ReadOnly)");
        assert_eq!(RegionSegment::KernArg.label(false), "Unknown");
        assert_eq!(RegionSegment::Other.label(true), "Unknown");
    }

    #[test]
    fn test_segment_from_raw() {
        assert_eq!(
            RegionSegment::from_raw(hsa_region_segment_t_HSA_REGION_SEGMENT_GLOBAL),
            RegionSegment::Global
        );
        assert_eq!(RegionSegment::from_raw(250), RegionSegment::Other);
    }

    #[test]
    fn test_pool_flags_from_bits() {
        let flags = PoolFlags::from_bits(
            hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_FINE_GRAINED
                | hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_KERNARG_INIT,
        );

        assert!(flags.fine_grained);
        assert!(flags.kernarg_init);
        assert!(!flags.coarse_grained);
    }

    #[test]
    fn test_pool_flags_describe() {
        assert_eq!(PoolFlags::from_bits(0).describe(), "None");
        assert_eq!(
            PoolFlags::from_bits(
                hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_FINE_GRAINED
                    | hsa_amd_memory_pool_global_flag_s_HSA_AMD_MEMORY_POOL_GLOBAL_FLAG_KERNARG_INIT
            )
            .describe(),
            "Fine Grained, KernArg"
        );
    }
}
