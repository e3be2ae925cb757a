pub mod city;
pub mod filter;
pub mod time_of_day;
pub mod trip;
