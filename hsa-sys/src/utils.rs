use crate::bindings::{
    hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_HYPERTRANSPORT,
    hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_INFINBAND,
    hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_PCIE,
    hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_QPI,
    hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_XGMI, hsa_amd_link_info_type_t,
    hsa_device_type_t, hsa_device_type_t_HSA_DEVICE_TYPE_CPU,
    hsa_device_type_t_HSA_DEVICE_TYPE_DSP, hsa_device_type_t_HSA_DEVICE_TYPE_GPU,
};

pub fn get_device_type_str(device_type: hsa_device_type_t) -> &'static str {
    match device_type {
        hsa_device_type_t_HSA_DEVICE_TYPE_CPU => "CPU",
        hsa_device_type_t_HSA_DEVICE_TYPE_GPU => "GPU",
        hsa_device_type_t_HSA_DEVICE_TYPE_DSP => "DSP",
        _ => "...",
    }
}

pub fn get_link_type_str(link_type: hsa_amd_link_info_type_t) -> &'static str {
    match link_type {
        hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_HYPERTRANSPORT => "HyperTransport",
        hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_QPI => "QPI",
        hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_PCIE => "PCIe",
        hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_INFINBAND => "InfiniBand",
        hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_XGMI => "XGMI",
        _ => "Other",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_str() {
        assert_eq!(get_device_type_str(hsa_device_type_t_HSA_DEVICE_TYPE_GPU), "GPU");
        assert_eq!(get_device_type_str(900), "...");
    }

    #[test]
    fn test_link_type_str() {
        assert_eq!(
            get_link_type_str(hsa_amd_link_info_type_s_HSA_AMD_LINK_INFO_TYPE_XGMI),
            "XGMI"
        );
        assert_eq!(get_link_type_str(77), "Other");
    }
}
