use crate::agent::Agent;
use crate::error::{hsa_check, HsaResult};
use hsa_sys::bindings::{
    hsa_agent_t, hsa_endianness_t, hsa_endianness_t_HSA_ENDIANNESS_BIG,
    hsa_endianness_t_HSA_ENDIANNESS_LITTLE, hsa_init, hsa_iterate_agents, hsa_machine_model_t,
    hsa_machine_model_t_HSA_MACHINE_MODEL_LARGE, hsa_machine_model_t_HSA_MACHINE_MODEL_SMALL,
    hsa_shut_down, hsa_status_t, hsa_status_t_HSA_STATUS_SUCCESS, hsa_system_get_info,
    hsa_system_info_t, hsa_system_info_t_HSA_SYSTEM_INFO_ENDIANNESS,
    hsa_system_info_t_HSA_SYSTEM_INFO_MACHINE_MODEL,
    hsa_system_info_t_HSA_SYSTEM_INFO_TIMESTAMP_FREQUENCY,
    hsa_system_info_t_HSA_SYSTEM_INFO_VERSION_MAJOR,
    hsa_system_info_t_HSA_SYSTEM_INFO_VERSION_MINOR,
};
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    Little,
    Big,
    Other,
}

impl Endianness {
    pub fn from_raw(raw: hsa_endianness_t) -> Self {
        match raw {
            hsa_endianness_t_HSA_ENDIANNESS_LITTLE => Self::Little,
            hsa_endianness_t_HSA_ENDIANNESS_BIG => Self::Big,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Little => "Little",
            Self::Big => "Big",
            Self::Other => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MachineModel {
    Small,
    Large,
    Other,
}

impl MachineModel {
    pub fn from_raw(raw: hsa_machine_model_t) -> Self {
        match raw {
            hsa_machine_model_t_HSA_MACHINE_MODEL_SMALL => Self::Small,
            hsa_machine_model_t_HSA_MACHINE_MODEL_LARGE => Self::Large,
            _ => Self::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "Small (32-bit)",
            Self::Large => "Large (64-bit)",
            Self::Other => "Unknown",
        }
    }
}

/// System-wide runtime properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SystemInfo {
    pub version_major: u16,
    pub version_minor: u16,
    pub timestamp_frequency: u64,
    pub endianness: Endianness,
    pub machine_model: MachineModel,
}

unsafe extern "C" fn collect_agents(
    agent: hsa_agent_t,
    data: *mut std::os::raw::c_void,
) -> hsa_status_t {
    let handles = &mut *(data as *mut Vec<hsa_agent_t>);
    handles.push(agent);

    hsa_status_t_HSA_STATUS_SUCCESS
}

fn system_info_raw<T: Default>(attribute: hsa_system_info_t) -> HsaResult<T> {
    let mut value = T::default();

    let ret =
        unsafe { hsa_system_get_info(attribute, &mut value as *mut _ as *mut std::os::raw::c_void) };
    hsa_check(ret)?;

    Ok(value)
}

/// The runtime session. `new` pairs with the `hsa_shut_down` in `Drop`, so
/// exactly one init/shutdown pair runs per session on every exit path.
#[derive(Debug)]
pub struct Runtime;

impl Runtime {
    pub fn new() -> HsaResult<Self> {
        let ret = unsafe { hsa_init() };
        hsa_check(ret)?;

        Ok(Self)
    }

    pub fn system_info(&self) -> HsaResult<SystemInfo> {
        Ok(SystemInfo {
            version_major: system_info_raw::<u16>(hsa_system_info_t_HSA_SYSTEM_INFO_VERSION_MAJOR)?,
            version_minor: system_info_raw::<u16>(hsa_system_info_t_HSA_SYSTEM_INFO_VERSION_MINOR)?,
            timestamp_frequency: system_info_raw::<u64>(
                hsa_system_info_t_HSA_SYSTEM_INFO_TIMESTAMP_FREQUENCY,
            )?,
            endianness: Endianness::from_raw(system_info_raw(
                hsa_system_info_t_HSA_SYSTEM_INFO_ENDIANNESS,
            )?),
            machine_model: MachineModel::from_raw(system_info_raw(
                hsa_system_info_t_HSA_SYSTEM_INFO_MACHINE_MODEL,
            )?),
        })
    }

    /// Enumerates every agent the runtime exposes, in runtime order.
    pub fn agents(&self) -> HsaResult<Vec<Agent>> {
        let mut handles: Vec<hsa_agent_t> = Vec::new();

        let ret = unsafe {
            hsa_iterate_agents(
                Some(collect_agents),
                &mut handles as *mut _ as *mut std::os::raw::c_void,
            )
        };
        hsa_check(ret)?;

        Ok(handles.into_iter().map(Agent::from_handle).collect())
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        let ret = unsafe { hsa_shut_down() };
        if ret != hsa_status_t_HSA_STATUS_SUCCESS {
            // A report was already produced at this point, keep the exit clean
            warn!(status = ret, "hsa_shut_down returned a non-success status");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endianness_from_raw() {
        assert_eq!(
            Endianness::from_raw(hsa_endianness_t_HSA_ENDIANNESS_LITTLE),
            Endianness::Little
        );
        assert_eq!(Endianness::from_raw(9), Endianness::Other);
    }

    #[test]
    fn test_machine_model_from_raw() {
        assert_eq!(
            MachineModel::from_raw(hsa_machine_model_t_HSA_MACHINE_MODEL_LARGE),
            MachineModel::Large
        );
        assert_eq!(MachineModel::from_raw(7), MachineModel::Other);
    }

    #[test]
    #[ignore] // Needs a ROCm stack with at least one visible agent
    fn test_runtime_session() {
        let runtime = Runtime::new().unwrap();

        let info = runtime.system_info().unwrap();
        println!("{:#?}", info);

        let agents = runtime.agents().unwrap();
        assert!(!agents.is_empty());
    }
}
