/// Top-level names that are never entered: support material, legal folders and
/// product families D-Link no longer ships.
pub(super) const SKIPPED_DIRECTORIES: &[&str] = &[
    "@archive",
    "anleitungen",
    "D-Link_Assist_Anleitung.pdf",
    "Hinweise Datenblaetter.txt",
    "Images_High_Resolution",
    "Images_Low_Resolution",
    "index_info.txt",
    "Legal - Information",
    "Product_Images",
    "Product_Information_Material",
    "self - service",
    "software",
    "Supportsystem_Anleitung_Mass_RMA.pdf",
    "Terms_and_Conditions",
    "tmp",
    "Warranty_Documents",
    // deprecated families
    "ant24", "ant70", "dcf", "de", "dfw", "dhd", "dif", "dm", "dph", "dvc", "dvg", "dta", "dsn", "dsm",
    "dns", "dvs", "dfl", "dbt", "dev", "dcm", "dgl", "dhs", "di", "dws", "dfe", "du",
];

/// Family code (product name up to the first `-`) to device category.
pub(super) const DEVICE_CLASSES: &[(&str, &str)] = &[
    ("dba", "Access Point"),
    ("dap", "Access Point"),
    ("dis", "Converter"),
    ("dmc", "Converter"),
    ("dge", "PCIe-Networkcard"),
    ("dwa", "PCIe-Networkcard"),
    ("dxe", "PCIe-Networkcard"),
    ("dps", "Redundant Power Supply"),
    ("dsr", "Router (Business)"),
    ("dwr", "Router (mobile)"),
    ("dwm", "Router (mobile)"),
    ("dsl", "Router (Modem)"),
    ("covr", "Router (Home)"),
    ("dir", "Router (Home)"),
    ("dva", "Router (Home)"),
    ("go", "Router (Home)"),
    ("dsp", "Smart Plug"),
    ("dcs", "Smart Wi-Fi Camera"),
    ("dsh", "Smart Wi-Fi Camera"),
    ("des", "Switch"),
    ("dgs", "Switch"),
    ("dkvm", "Switch"),
    ("dqs", "Switch"),
    ("dxs", "Switch"),
    ("dem", "Transceiver"),
    ("dub", "USB Extensions"),
    ("dnr", "Video Recorder"),
    ("dwc", "Wireless Controller"),
    // dwl mixes adapters, bridges and access points; see ACCESS_POINT_MARKER
    ("dwl", "other"),
];

pub(super) const ACCESS_POINT_FAMILY: &str = "dwl";
pub(super) const ACCESS_POINT_MARKER: &str = "ap";
pub(super) const ACCESS_POINT_LABEL: &str = "Access Point";
