pub mod a101_shower_type;
pub mod a102_shower_model;
pub mod a103_glass_type;
pub mod a104_glass_thickness;
pub mod a105_hardware_finish;
pub mod a106_hardware_type;
pub mod a107_seal_type;
pub mod a108_add_on;
pub mod common;
