use serde::{Deserialize, Serialize};

/// Full payload of `GET /forecast` (mirrors the forecast service).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastBundle {
    #[serde(rename = "weatherResponse")]
    pub weather_response: CurrentConditions,
    /// Not every provider behind the service supplies hourly data.
    #[serde(rename = "hourlyTemp", default)]
    pub hourly_temp: Option<Vec<HourlySlot>>,
    /// Required: a success body without daily entries is rejected at
    /// decode time.
    #[serde(rename = "dayTemp")]
    pub day_temp: Vec<DailySlot>,
}

/// Current conditions for the resolved location.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub condition: String,
    /// Degrees Celsius.
    pub temperature: f64,
}

/// One hour of the forecast. `time` is display-ready text from the
/// service; the client never computes on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlySlot {
    pub time: String,
    pub temp: f64,
    pub condition: String,
}

/// One day of the forecast.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySlot {
    pub date: String,
    #[serde(rename = "avgTemp")]
    pub avg_temp: f64,
    #[serde(rename = "maxTemp")]
    pub max_temp: f64,
    #[serde(rename = "minTemp")]
    pub min_temp: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_body() {
        let body = r#"{
            "weatherResponse": {"city": "Paris", "country": "FR", "condition": "Clear", "temperature": 22},
            "hourlyTemp": [
                {"time": "10:00", "temp": 18.5, "condition": "Clear"},
                {"time": "11:00", "temp": 20.0, "condition": "Sunny"}
            ],
            "dayTemp": [{"date": "2024-01-01", "avgTemp": 20, "maxTemp": 25, "minTemp": 15}]
        }"#;

        let bundle: ForecastBundle =
            serde_json::from_str(body).expect("Should decode a well-formed body");

        assert_eq!(bundle.weather_response.city, "Paris");
        assert_eq!(bundle.weather_response.country, "FR");
        assert_eq!(bundle.weather_response.temperature, 22.0);

        let hourly = bundle.hourly_temp.expect("hourly data present");
        assert_eq!(hourly.len(), 2);
        // Order comes from the service and must survive decoding.
        assert_eq!(hourly[0].time, "10:00");
        assert_eq!(hourly[1].time, "11:00");

        assert_eq!(bundle.day_temp.len(), 1);
        assert_eq!(bundle.day_temp[0].date, "2024-01-01");
        assert_eq!(bundle.day_temp[0].avg_temp, 20.0);
        assert_eq!(bundle.day_temp[0].max_temp, 25.0);
        assert_eq!(bundle.day_temp[0].min_temp, 15.0);
    }

    #[test]
    fn test_decode_without_hourly() {
        let body = r#"{
            "weatherResponse": {"city": "Paris", "country": "FR", "condition": "Clear", "temperature": 22},
            "dayTemp": [{"date": "2024-01-01", "avgTemp": 20, "maxTemp": 25, "minTemp": 15}]
        }"#;

        let bundle: ForecastBundle =
            serde_json::from_str(body).expect("Missing hourlyTemp is a valid empty state");
        assert!(bundle.hourly_temp.is_none());
    }

    #[test]
    fn test_decode_null_hourly() {
        let body = r#"{
            "weatherResponse": {"city": "Oslo", "country": "NO", "condition": "Cloudy", "temperature": 3},
            "hourlyTemp": null,
            "dayTemp": [{"date": "2024-01-01", "avgTemp": 2, "maxTemp": 4, "minTemp": -1}]
        }"#;

        let bundle: ForecastBundle =
            serde_json::from_str(body).expect("Null hourlyTemp is a valid empty state");
        assert!(bundle.hourly_temp.is_none());
    }

    #[test]
    fn test_decode_without_daily_fails() {
        let body = r#"{
            "weatherResponse": {"city": "Paris", "country": "FR", "condition": "Clear", "temperature": 22}
        }"#;

        let result: Result<ForecastBundle, _> = serde_json::from_str(body);
        assert!(result.is_err());
    }
}
