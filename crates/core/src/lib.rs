// Core types shared by the ingestion pipeline and the chart resolver

pub mod chart;
pub mod table;
pub mod taxonomy;
pub mod wrap;
