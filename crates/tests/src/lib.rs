#[cfg(test)]
mod common;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod logout_tests;

#[cfg(test)]
mod route_guard_tests;

#[cfg(test)]
mod secondary_gate_tests;

#[cfg(test)]
mod preference_sync_tests;

#[cfg(test)]
mod department_filter_tests;

#[cfg(test)]
mod config_tests;
