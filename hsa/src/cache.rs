use crate::error::{hsa_check, HsaResult};
use hsa_sys::bindings::{
    hsa_agent_iterate_caches, hsa_agent_t, hsa_cache_get_info,
    hsa_cache_info_t_HSA_CACHE_INFO_LEVEL, hsa_cache_info_t_HSA_CACHE_INFO_SIZE, hsa_cache_t,
    hsa_status_t, hsa_status_t_HSA_STATUS_SUCCESS,
};

unsafe extern "C" fn collect_caches(
    cache: hsa_cache_t,
    data: *mut std::os::raw::c_void,
) -> hsa_status_t {
    let handles = &mut *(data as *mut Vec<hsa_cache_t>);
    handles.push(cache);

    hsa_status_t_HSA_STATUS_SUCCESS
}

/// One level of an agent's cache hierarchy.
#[derive(Debug, Clone)]
pub struct Cache {
    cache: hsa_cache_t,
}

impl Cache {
    pub(crate) fn collect(agent: hsa_agent_t) -> HsaResult<Vec<Cache>> {
        let mut handles: Vec<hsa_cache_t> = Vec::new();

        let ret = unsafe {
            hsa_agent_iterate_caches(
                agent,
                Some(collect_caches),
                &mut handles as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(handles.into_iter().map(|cache| Cache { cache }).collect())
    }

    pub fn get_hsa_cache_t(&self) -> hsa_cache_t {
        self.cache
    }

    pub fn level(&self) -> HsaResult<u8> {
        let mut level: u8 = 0;

        let ret = unsafe {
            hsa_cache_get_info(
                self.cache,
                hsa_cache_info_t_HSA_CACHE_INFO_LEVEL,
                &mut level as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(level)
    }

    /// Cache size in bytes. Some agents report 0 here.
    pub fn size(&self) -> HsaResult<u32> {
        let mut size: u32 = 0;

        let ret = unsafe {
            hsa_cache_get_info(
                self.cache,
                hsa_cache_info_t_HSA_CACHE_INFO_SIZE,
                &mut size as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(size)
    }
}
