#[cfg(test)]
mod common;

#[cfg(test)]
mod spot_list_tests;

#[cfg(test)]
mod reserve_tests;

#[cfg(test)]
mod health_tests;

#[cfg(test)]
mod store_flow_tests;
