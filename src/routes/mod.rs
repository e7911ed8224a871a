mod greeting;

pub use greeting::greeting_routes;
