pub mod owm_forecast;
