mod support;

mod catalog_files;
mod locale_persistence;
mod passenger_navigation;
