pub mod department_filter;

pub use department_filter::DepartmentFilter;
