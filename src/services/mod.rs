pub mod ado_api;
pub mod confidence_plot;
pub mod distribution;
pub mod forecast_types;
pub mod histogram;
pub mod percentiles;
pub mod simulation;
pub mod throughput_builder;
pub mod throughput_plot;
pub mod work_items_yaml;
