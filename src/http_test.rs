use super::*;

fn client(base: &str) -> BookingApiClient {
    let config = FormConfig { api_base_url: base.to_owned(), ..FormConfig::default() };
    BookingApiClient::new(&config).unwrap()
}

#[test]
fn directory_url_includes_limit() {
    let api = client("https://booking.example.test/api");
    assert_eq!(api.directory_url(100), "https://booking.example.test/api/users?enabled=true&limit=100");
}

#[test]
fn bookings_url_trims_trailing_slash() {
    let api = client("https://booking.example.test/api/");
    assert_eq!(api.bookings_url(), "https://booking.example.test/api/bookings");
}

#[tokio::test]
async fn unreachable_directory_is_transport_error() {
    let api = client("http://127.0.0.1:9");
    let err = api.list_candidates(10).await.unwrap_err();
    assert!(matches!(err, LookupError::Transport(_)));
}
