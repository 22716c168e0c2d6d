#![allow(non_upper_case_globals)]
#![allow(non_snake_case)]
#![allow(non_camel_case_types)]
#![allow(clippy::useless_transmute)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::unnecessary_cast)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::missing_safety_doc)]
pub mod bindings;
pub mod utils;

#[cfg(test)]
mod tests {
    use crate::bindings::{
        hsa_agent_get_info, hsa_agent_info_t_HSA_AGENT_INFO_DEVICE,
        hsa_agent_info_t_HSA_AGENT_INFO_NAME, hsa_agent_t, hsa_device_type_t, hsa_init,
        hsa_iterate_agents, hsa_shut_down, hsa_status_t, hsa_status_t_HSA_STATUS_SUCCESS,
        hsa_system_get_info, hsa_system_info_t_HSA_SYSTEM_INFO_VERSION_MAJOR,
        hsa_system_info_t_HSA_SYSTEM_INFO_VERSION_MINOR,
    };
    use crate::utils::get_device_type_str;

    #[repr(C)]
    #[derive(Debug)]
    struct AgentHandles {
        agents: Vec<hsa_agent_t>,
    }

    unsafe extern "C" fn collect_agents(
        agent: hsa_agent_t,
        data: *mut std::os::raw::c_void,
    ) -> hsa_status_t {
        let payload = &mut *(data as *mut AgentHandles);
        payload.agents.push(agent);

        hsa_status_t_HSA_STATUS_SUCCESS
    }

    #[test]
    #[ignore] // Needs a ROCm stack with at least one visible agent
    fn test_enumeration_surface() {
        let ret = unsafe { hsa_init() };
        assert_eq!(ret, hsa_status_t_HSA_STATUS_SUCCESS);

        let mut major: u16 = 0;
        let mut minor: u16 = 0;

        let ret = unsafe {
            hsa_system_get_info(
                hsa_system_info_t_HSA_SYSTEM_INFO_VERSION_MAJOR,
                &mut major as *mut _ as *mut std::os::raw::c_void,
            )
        };
        assert_eq!(ret, hsa_status_t_HSA_STATUS_SUCCESS);

        let ret = unsafe {
            hsa_system_get_info(
                hsa_system_info_t_HSA_SYSTEM_INFO_VERSION_MINOR,
                &mut minor as *mut _ as *mut std::os::raw::c_void,
            )
        };
        assert_eq!(ret, hsa_status_t_HSA_STATUS_SUCCESS);

        println!("interface version: {}.{}", major, minor);

        let mut handles = AgentHandles { agents: Vec::new() };

        let ret = unsafe {
            hsa_iterate_agents(
                Some(collect_agents),
                &mut handles as *mut _ as *mut std::os::raw::c_void,
            )
        };
        assert_eq!(ret, hsa_status_t_HSA_STATUS_SUCCESS);

        assert!(!handles.agents.is_empty());

        for agent in handles.agents.into_iter() {
            let mut name = [0u8; 64];
            let mut device_type: hsa_device_type_t = 0;

            let ret = unsafe {
                hsa_agent_get_info(
                    agent,
                    hsa_agent_info_t_HSA_AGENT_INFO_NAME,
                    name.as_mut_ptr() as *mut std::os::raw::c_void,
                )
            };
            assert_eq!(ret, hsa_status_t_HSA_STATUS_SUCCESS);

            let ret = unsafe {
                hsa_agent_get_info(
                    agent,
                    hsa_agent_info_t_HSA_AGENT_INFO_DEVICE,
                    &mut device_type as *mut _ as *mut std::os::raw::c_void,
                )
            };
            assert_eq!(ret, hsa_status_t_HSA_STATUS_SUCCESS);

            println!(
                "Agent - Name: {:?}, DEVICE_TYPE: {}",
                String::from_utf8_lossy(&name),
                get_device_type_str(device_type)
            );
        }

        let ret = unsafe { hsa_shut_down() };
        assert_eq!(ret, hsa_status_t_HSA_STATUS_SUCCESS);
    }
}
