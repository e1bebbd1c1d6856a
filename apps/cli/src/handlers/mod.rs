pub mod classes;
pub mod lookup;
pub mod scan;
