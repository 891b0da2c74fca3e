pub mod p901_glass_prices;
pub mod p902_hardware_prices;
pub mod p903_seal_prices;
pub mod p904_addon_prices;
