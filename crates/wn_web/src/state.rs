use wn_filter::WeatherNewsFilter;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub filter: WeatherNewsFilter,
}

impl AppState {
    pub fn new(filter: WeatherNewsFilter) -> Self {
        Self { filter }
    }
}
