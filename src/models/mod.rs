pub mod adjustment;
pub mod product;
pub mod scan_event;
pub mod symbology;
