pub mod page_access;
