mod compliance;
mod services;
