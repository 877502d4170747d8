//! Structural Pattern: Proxy
//! Example: Caching proxy in front of a third-party weather API
//!
//! Run with: cargo run --bin s07_proxy

use serde::Deserialize;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Malformed response: no weather entries")]
    MalformedResponse,
}

/// Common operations for both the real subject and the proxy, so the
/// client code cannot tell them apart.
pub trait WeatherClient {
    fn weather(&self, location: &str) -> Result<String, WeatherError>;
}

#[derive(Deserialize)]
struct WeatherResponse {
    weather: Vec<WeatherEntry>,
}

#[derive(Deserialize)]
struct WeatherEntry {
    description: String,
}

/// The real subject: a third-party API client we probably cannot
/// modify. One HTTP GET, one JSON response shape.
pub struct OpenWeather {
    client: reqwest::blocking::Client,
    token: String,
}

impl OpenWeather {
    pub fn new(token: impl Into<String>) -> Self {
        OpenWeather {
            client: reqwest::blocking::Client::new(),
            token: token.into(),
        }
    }
}

impl WeatherClient for OpenWeather {
    fn weather(&self, location: &str) -> Result<String, WeatherError> {
        let response: WeatherResponse = self
            .client
            .get("http://api.openweathermap.org/data/2.5/weather")
            .query(&[("q", location), ("APPID", self.token.as_str())])
            .send()?
            .json()?;

        let entry = response
            .weather
            .first()
            .ok_or(WeatherError::MalformedResponse)?;
        Ok(format!("weather: {}", entry.description))
    }
}

/// Proxy with an interface identical to the subject; consults the
/// real client only on a cache miss. Only successful lookups are
/// cached, errors stay transparent to the caller.
pub struct WeatherProxy {
    client: Box<dyn WeatherClient>,
    cache: RefCell<HashMap<String, String>>,
}

impl WeatherProxy {
    pub fn new(client: Box<dyn WeatherClient>) -> Self {
        WeatherProxy {
            client,
            cache: RefCell::new(HashMap::new()),
        }
    }
}

impl WeatherClient for WeatherProxy {
    fn weather(&self, location: &str) -> Result<String, WeatherError> {
        if let Some(cached) = self.cache.borrow().get(location) {
            println!("+ cache: HIT, retrieving result from cache..");
            return Ok(cached.clone());
        }

        println!("- cache: MISS");
        let result = self.client.weather(location)?;
        self.cache
            .borrow_mut()
            .insert(location.to_string(), result.clone());
        Ok(result)
    }
}

fn main() {
    let weather = OpenWeather::new("177b4a1be7dfd10e0d30e8fdeabe0ea9");
    let proxy = WeatherProxy::new(Box::new(weather));

    for location in ["Kiev", "Lviv", "Kiev"] {
        match proxy.weather(location) {
            Ok(report) => println!("{}", report),
            Err(err) => println!("{}", err),
        }
    }

    /* Output example:
    - cache: MISS
    weather: clear sky
    - cache: MISS
    weather: scattered clouds
    + cache: HIT, retrieving result from cache..
    weather: clear sky */
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    /// Counts upstream calls instead of hitting the network.
    struct StubWeather {
        calls: RefCell<Vec<String>>,
        fail: bool,
    }

    impl StubWeather {
        fn new(fail: bool) -> Rc<Self> {
            Rc::new(StubWeather {
                calls: RefCell::new(Vec::new()),
                fail,
            })
        }
    }

    impl WeatherClient for Rc<StubWeather> {
        fn weather(&self, location: &str) -> Result<String, WeatherError> {
            self.calls.borrow_mut().push(location.to_string());
            if self.fail {
                return Err(WeatherError::MalformedResponse);
            }
            Ok(format!("weather in {}", location))
        }
    }

    #[test]
    fn repeated_location_is_served_from_cache() {
        let stub = StubWeather::new(false);
        let proxy = WeatherProxy::new(Box::new(Rc::clone(&stub)));

        assert_eq!(proxy.weather("Kiev").unwrap(), "weather in Kiev");
        assert_eq!(proxy.weather("Kiev").unwrap(), "weather in Kiev");

        // the second request never went upstream
        assert_eq!(*stub.calls.borrow(), vec!["Kiev".to_string()]);
    }

    #[test]
    fn distinct_locations_each_reach_the_client_once() {
        let stub = StubWeather::new(false);
        let proxy = WeatherProxy::new(Box::new(Rc::clone(&stub)));

        proxy.weather("Kiev").unwrap();
        proxy.weather("Lviv").unwrap();
        proxy.weather("Kiev").unwrap();

        assert_eq!(
            *stub.calls.borrow(),
            vec!["Kiev".to_string(), "Lviv".to_string()]
        );
    }

    #[test]
    fn errors_are_propagated_and_never_cached() {
        let stub = StubWeather::new(true);
        let proxy = WeatherProxy::new(Box::new(Rc::clone(&stub)));

        assert!(proxy.weather("Kiev").is_err());
        assert!(proxy.weather("Kiev").is_err());

        // both attempts went upstream, nothing was cached
        assert_eq!(stub.calls.borrow().len(), 2);
    }
}
