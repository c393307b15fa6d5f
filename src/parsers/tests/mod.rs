mod integration_tests;
mod price_tests;
