/// Records that belong to a hospital department.
pub trait DepartmentScoped {
    fn department(&self) -> &str;
}

/// Case-insensitive exact match; `None` matches everything.
pub fn matches_department(department: &str, selected: Option<&str>) -> bool {
    match selected {
        None => true,
        Some(wanted) => department.to_lowercase() == wanted.to_lowercase(),
    }
}

/// Keep only the records in the selected department, preserving order.
pub fn filter_by_department<'a, T: DepartmentScoped>(
    records: &'a [T],
    selected: Option<&str>,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|r| matches_department(r.department(), selected))
        .collect()
}
