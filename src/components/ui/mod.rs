pub mod callout;
pub mod page_header;
