mod catalog_client;
mod fetch;
mod helpers;
