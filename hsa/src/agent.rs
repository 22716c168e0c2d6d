use crate::cache::Cache;
use crate::error::{hsa_check, HsaResult};
use crate::memory::{MemoryPool, Region};
use crate::utils::fixed_buf_to_string;
use hsa_sys::bindings::{
    hsa_agent_feature_t_HSA_AGENT_FEATURE_KERNEL_DISPATCH, hsa_agent_get_info, hsa_agent_info_t,
    hsa_agent_info_t_HSA_AGENT_INFO_FEATURE, hsa_agent_info_t_HSA_AGENT_INFO_NAME,
    hsa_agent_info_t_HSA_AGENT_INFO_QUEUES_MAX, hsa_agent_info_t_HSA_AGENT_INFO_QUEUE_MAX_SIZE,
    hsa_agent_info_t_HSA_AGENT_INFO_VENDOR_NAME, hsa_agent_info_t_HSA_AGENT_INFO_WAVEFRONT_SIZE,
    hsa_agent_info_t_HSA_AGENT_INFO_DEVICE, hsa_agent_t,
    hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_BDFID, hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_CHIP_ID,
    hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_COMPUTE_UNIT_COUNT,
    hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_DOMAIN,
    hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_DRIVER_NODE_ID,
    hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_MAX_WAVES_PER_CU,
    hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_NUM_SIMDS_PER_CU,
    hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_PRODUCT_NAME, hsa_device_type_t,
    hsa_device_type_t_HSA_DEVICE_TYPE_CPU, hsa_device_type_t_HSA_DEVICE_TYPE_DSP,
    hsa_device_type_t_HSA_DEVICE_TYPE_GPU,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceType {
    Cpu,
    Gpu,
    Dsp,
    Other,
}

impl DeviceType {
    pub fn from_raw(raw: hsa_device_type_t) -> Self {
        match raw {
            hsa_device_type_t_HSA_DEVICE_TYPE_CPU => Self::Cpu,
            hsa_device_type_t_HSA_DEVICE_TYPE_GPU => Self::Gpu,
            hsa_device_type_t_HSA_DEVICE_TYPE_DSP => Self::Dsp,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Dsp => "DSP",
            Self::Other => "Other",
        }
    }
}

/// GPU-only agent properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GpuInfo {
    pub compute_units: u32,
    pub simds_per_cu: u32,
    pub max_waves_per_cu: u32,
    pub chip_id: u32,
    pub bdf_id: u32,
    pub domain: u32,
}

impl GpuInfo {
    pub fn total_simds(&self) -> u32 {
        self.compute_units * self.simds_per_cu
    }

    /// The runtime reports waves per compute unit; SIMDs share them evenly.
    /// 0 when the runtime reports no SIMDs.
    pub fn waves_per_simd(&self) -> u32 {
        if self.simds_per_cu == 0 {
            0
        } else {
            self.max_waves_per_cu / self.simds_per_cu
        }
    }
}

#[derive(Debug, Clone)]
pub struct Agent {
    agent: hsa_agent_t,
}

impl PartialEq for Agent {
    fn eq(&self, other: &Self) -> bool {
        self.agent.handle.eq(&other.agent.handle)
    }
}

impl Agent {
    pub(crate) fn from_handle(agent: hsa_agent_t) -> Self {
        Self { agent }
    }

    pub fn get_hsa_agent_t(&self) -> hsa_agent_t {
        self.agent
    }

    fn info_raw<T: Default>(&self, attribute: hsa_agent_info_t) -> HsaResult<T> {
        let mut value = T::default();

        let ret = unsafe {
            hsa_agent_get_info(
                self.agent,
                attribute,
                &mut value as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(value)
    }

    // NAME, VENDOR_NAME and PRODUCT_NAME all fill a fixed 64-byte buffer
    fn info_str(&self, attribute: hsa_agent_info_t) -> HsaResult<String> {
        let mut buf = [0u8; 64];

        let ret = unsafe {
            hsa_agent_get_info(
                self.agent,
                attribute,
                buf.as_mut_ptr() as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(fixed_buf_to_string(&buf)?)
    }

    pub fn name(&self) -> HsaResult<String> {
        self.info_str(hsa_agent_info_t_HSA_AGENT_INFO_NAME)
    }

    pub fn vendor_name(&self) -> HsaResult<String> {
        self.info_str(hsa_agent_info_t_HSA_AGENT_INFO_VENDOR_NAME)
    }

    /// Marketing name. May come back empty, callers fall back to `name`.
    pub fn product_name(&self) -> HsaResult<String> {
        self.info_str(hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_PRODUCT_NAME)
    }

    pub fn device_type(&self) -> HsaResult<DeviceType> {
        Ok(DeviceType::from_raw(
            self.info_raw::<hsa_device_type_t>(hsa_agent_info_t_HSA_AGENT_INFO_DEVICE)?,
        ))
    }

    /// Topology node id assigned by the kernel driver.
    pub fn node_id(&self) -> HsaResult<u32> {
        self.info_raw(hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_DRIVER_NODE_ID)
    }

    pub fn is_kernel_dispatch(&self) -> HsaResult<bool> {
        let features: u32 = self.info_raw(hsa_agent_info_t_HSA_AGENT_INFO_FEATURE)?;

        Ok(features & hsa_agent_feature_t_HSA_AGENT_FEATURE_KERNEL_DISPATCH != 0)
    }

    pub fn wavefront_size(&self) -> HsaResult<u32> {
        self.info_raw(hsa_agent_info_t_HSA_AGENT_INFO_WAVEFRONT_SIZE)
    }

    pub fn queues_max(&self) -> HsaResult<u32> {
        self.info_raw(hsa_agent_info_t_HSA_AGENT_INFO_QUEUES_MAX)
    }

    pub fn queue_max_size(&self) -> HsaResult<u32> {
        self.info_raw(hsa_agent_info_t_HSA_AGENT_INFO_QUEUE_MAX_SIZE)
    }

    pub fn gpu_info(&self) -> HsaResult<GpuInfo> {
        Ok(GpuInfo {
            compute_units: self
                .info_raw(hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_COMPUTE_UNIT_COUNT)?,
            simds_per_cu: self.info_raw(hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_NUM_SIMDS_PER_CU)?,
            max_waves_per_cu: self
                .info_raw(hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_MAX_WAVES_PER_CU)?,
            chip_id: self.info_raw(hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_CHIP_ID)?,
            bdf_id: self.info_raw(hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_BDFID)?,
            domain: self.info_raw(hsa_amd_agent_info_s_HSA_AMD_AGENT_INFO_DOMAIN)?,
        })
    }

    pub fn regions(&self) -> HsaResult<Vec<Region>> {
        Region::collect(self.agent)
    }

    pub fn caches(&self) -> HsaResult<Vec<Cache>> {
        Cache::collect(self.agent)
    }

    pub fn memory_pools(&self) -> HsaResult<Vec<MemoryPool>> {
        MemoryPool::collect(self.agent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_from_raw() {
        assert_eq!(
            DeviceType::from_raw(hsa_device_type_t_HSA_DEVICE_TYPE_CPU),
            DeviceType::Cpu
        );
        assert_eq!(
            DeviceType::from_raw(hsa_device_type_t_HSA_DEVICE_TYPE_GPU),
            DeviceType::Gpu
        );
        assert_eq!(DeviceType::from_raw(42), DeviceType::Other);
    }

    #[test]
    fn test_gpu_derived_counts() {
        let info = GpuInfo {
            compute_units: 96,
            simds_per_cu: 4,
            max_waves_per_cu: 32,
            ..Default::default()
        };

        assert_eq!(info.total_simds(), 384);
        assert_eq!(info.waves_per_simd(), 8);
    }

    #[test]
    fn test_gpu_derived_counts_without_simds() {
        let info = GpuInfo::default();

        assert_eq!(info.total_simds(), 0);
        assert_eq!(info.waves_per_simd(), 0);
    }
}
