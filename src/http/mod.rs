mod client;

pub use client::StatsHttpClient;
