mod errors;

pub use errors::OWMError;

use std::time::Duration;
use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use crate::config::OpenWeatherParameters;
use crate::models::owm_forecast::{ErrorBody, FullForecast};

/// Anything able to produce a forecast document for a location
pub trait ForecastSource {
    fn get_forecast(&self, location: &str) -> Result<FullForecast, OWMError>;
}

/// Struct for fetching 5 day / 3 hour forecasts from OpenWeather
pub struct OpenWeather {
    client: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeather {
    /// Returns an OpenWeather struct ready for fetching forecasts
    ///
    /// # Arguments
    ///
    /// * 'params' - endpoint, api key and request timeout
    pub fn new(params: &OpenWeatherParameters) -> Result<OpenWeather, OWMError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(params.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: params.base_url.clone(),
            api_key: params.api_key.clone(),
        })
    }

    /// Query parameters for a forecast request, units are always metric
    ///
    /// # Arguments
    ///
    /// * 'location' - city or village name
    fn query<'a>(&'a self, location: &'a str) -> Vec<(&'a str, &'a str)> {
        vec![
            ("q", location),
            ("appid", self.api_key.as_str()),
            ("units", "metric"),
        ]
    }
}

impl ForecastSource for OpenWeather {
    /// Retrieves the forecast for the given location in one single request.
    /// Anything but a 200 response is returned as an error carrying the status code
    /// and, if OpenWeather included one, its error message.
    ///
    /// # Arguments
    ///
    /// * 'location' - city or village name
    fn get_forecast(&self, location: &str) -> Result<FullForecast, OWMError> {
        info!("requesting forecast for '{}'", location);

        let res = self.client
            .get(&self.base_url)
            .query(&self.query(location))
            .send()?;

        let status = res.status();
        if status != StatusCode::OK {
            let message = res.text().map(|b| error_message(&b)).unwrap_or_default();
            warn!("forecast request failed with status {}: {}", status, message);
            return Err(OWMError::Status { status: status.as_u16(), message });
        }

        let json = res.text()?;
        let forecast: FullForecast = serde_json::from_str(&json)?;
        debug!("forecast document with {} samples",
               forecast.list.as_ref().map_or(0, |l| l.len()));

        Ok(forecast)
    }
}

/// Extracts the message from an OpenWeather error body, empty if there is none
///
/// # Arguments
///
/// * 'json' - response body
fn error_message(json: &str) -> String {
    serde_json::from_str::<ErrorBody>(json)
        .map(|b| b.message)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, BufReader, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    fn params() -> OpenWeatherParameters {
        OpenWeatherParameters {
            api_key: "secret".to_string(),
            ..OpenWeatherParameters::default()
        }
    }

    #[test]
    fn query_is_metric_and_keyed() {
        let owm = OpenWeather::new(&params()).unwrap();
        let query = owm.query("São Paulo");

        assert_eq!(query, vec![("q", "São Paulo"), ("appid", "secret"), ("units", "metric")]);
    }

    #[test]
    fn error_message_from_body() {
        assert_eq!(error_message(r#"{"cod":"404","message":"city not found"}"#), "city not found");
        assert_eq!(error_message(r#"{"cod":401}"#), "");
        assert_eq!(error_message("<html>bad gateway</html>"), "");
    }

    /// Serves one canned http response on a loopback port, the returned handle
    /// yields the request line that was received
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/data/2.5/forecast", listener.local_addr().unwrap());

        let handle = thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut request_line = String::new();
            reader.read_line(&mut request_line).unwrap();
            let mut header = String::new();
            while reader.read_line(&mut header).unwrap() > 0 && header != "\r\n" {
                header.clear();
            }

            let mut stream = stream;
            write!(stream, "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                   status_line, body.len(), body).unwrap();
            stream.flush().unwrap();

            request_line.trim_end().to_string()
        });

        (url, handle)
    }

    fn owm_at(url: String) -> OpenWeather {
        OpenWeather::new(&OpenWeatherParameters {
            api_key: "k".to_string(),
            base_url: url,
            timeout_secs: 5,
        }).unwrap()
    }

    #[test]
    fn not_found_is_status_error_with_message() {
        let (url, handle) = serve_once("404 Not Found", r#"{"cod":"404","message":"city not found"}"#);

        let result = owm_at(url).get_forecast("São Paulo");
        let request_line = handle.join().unwrap();

        match result {
            Err(OWMError::Status { status, message }) => {
                assert_eq!(status, 404);
                assert_eq!(message, "city not found");
            },
            other => panic!("expected status error, got {:?}", other.map(|_| ())),
        }
        assert_eq!(request_line, "GET /data/2.5/forecast?q=S%C3%A3o+Paulo&appid=k&units=metric HTTP/1.1");
    }

    #[test]
    fn status_error_without_json_body() {
        let (url, handle) = serve_once("502 Bad Gateway", "<html>bad gateway</html>");

        let result = owm_at(url).get_forecast("Lund");
        handle.join().unwrap();

        assert!(matches!(result, Err(OWMError::Status { status: 502, ref message }) if message.is_empty()));
    }

    #[test]
    fn ok_response_is_decoded() {
        let body = r#"{"cod":"200","list":[{"dt":1714521600,"main":{"temp":11.5,"humidity":60},"weather":[{"main":"Clear"}]}],"city":{"name":"Lund","country":"SE"}}"#;
        let (url, handle) = serve_once("200 OK", body);

        let forecast = owm_at(url).get_forecast("Lund").unwrap();
        handle.join().unwrap();

        let list = forecast.list.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].main.temp, 11.5);
        assert_eq!(list[0].rain_volume(), 0.0);
        assert_eq!(forecast.city.unwrap().name, "Lund");
    }

    #[test]
    fn ok_response_with_bad_json_is_document_error() {
        let (url, handle) = serve_once("200 OK", "not json");

        let result = owm_at(url).get_forecast("Lund");
        handle.join().unwrap();

        assert!(matches!(result, Err(OWMError::Document(_))));
    }

    #[test]
    fn status_error_reads_like_original_message() {
        let e = OWMError::Status { status: 404, message: "city not found".to_string() };
        assert_eq!(e.to_string(), "Error: Unable to fetch data. Status Code: 404");
    }
}
