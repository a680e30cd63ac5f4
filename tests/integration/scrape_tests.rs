//! Integration tests for the scraper client
//!
//! These tests use wiremock to stand in for the site and run every
//! operation end-to-end over HTTP.

use dramabox_scraper::api::{dispatch, Route};
use dramabox_scraper::config::{Config, HttpConfig, SiteConfig};
use dramabox_scraper::{DramaboxClient, EpisodeEntry, ScraperError};
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_AGENT: &str = "DramaboxTest/1.0 (integration suite)";

const FRONT_PAGE: &str = r#"<!DOCTYPE html>
<html><head><title>DramaBox</title></head><body>
<main>
  <div class="drama-grid">
    <div class="drama-card">
      <div class="drama-image"><img src="https://cdn.example.com/41000119.jpg" alt="Hidden Heiress"></div>
      <h3 class="drama-title">Hidden Heiress</h3>
      <div class="drama-meta">
        <span>Views: 1.2M</span>
        <span itemprop="numberOfEpisodes">Episodes: 80</span>
      </div>
      <a class="watch-button" href="/watch.php?bookId=41000119&lang=in">Watch</a>
    </div>
    <div class="drama-card">
      <h3 class="drama-title">No Link Yet</h3>
      <div class="drama-meta"><span>Views: 3K</span></div>
    </div>
  </div>
</main>
<aside class="sidebar-widget">
  <h2>Trending</h2>
  <div class="rank-list">
    <a class="rank-item" href="watch.php?bookId=41000200&lang=in">
      <span class="rank-number">1</span>
      <div class="rank-image"><img src="https://cdn.example.com/41000200.jpg"></div>
      <div class="rank-info">
        <h4 class="rank-title">CEO's Secret Wife</h4>
        <div class="rank-meta"><span>Views: 9.8M</span><span>Episodes: 64</span></div>
      </div>
    </a>
    <a class="rank-item" href="https://dramabox.web.id/watch.php?bookId=41000201&lang=in">
      <span class="rank-number">2</span>
      <div class="rank-info"><h4 class="rank-title">Return of the Heir</h4></div>
    </a>
  </div>
</aside>
</body></html>"#;

const WATCH_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
  <meta itemprop="thumbnailUrl" content="https://cdn.example.com/41000119-thumb.jpg">
  <meta itemprop="uploadDate" content="2024-03-18">
</head><body>
  <video id="mainVideo" controls><source src="https://cdn.example.com/41000119/ep1.m3u8"></video>
  <h1 class="video-title">Hidden Heiress - Episode 1</h1>
  <div class="video-meta">
    <span>Followers: 25K</span>
    <span itemprop="numberOfEpisodes">Episodes: 80</span>
  </div>
  <p class="video-description">A quiet heiress returns to claim her family's company.</p>
  <div class="episodes-grid">
    <button class="episode-btn" data-episode="1">1</button>
    <button class="episode-btn" data-episode="2">2</button>
    <button class="episode-btn locked" data-episode="">VIP</button>
    <button class="episode-btn" data-episode="3">3</button>
  </div>
</body></html>"#;

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("content-type", "text/html; charset=utf-8")
}

fn create_test_config(base_url: &str) -> Config {
    Config {
        site: SiteConfig::with_base_url(base_url),
        http: HttpConfig {
            user_agent: TEST_AGENT.to_string(),
            timeout_secs: 5,
            connect_timeout_secs: 2,
        },
    }
}

fn create_client(server: &MockServer) -> DramaboxClient {
    DramaboxClient::new(&create_test_config(&server.uri())).expect("Failed to build client")
}

#[tokio::test]
async fn test_latest_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(FRONT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let cards = create_client(&server).latest().await.unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].title, "Hidden Heiress");
    assert_eq!(cards[0].content_id.as_deref(), Some("41000119"));
    assert_eq!(cards[0].image.as_deref(), Some("https://cdn.example.com/41000119.jpg"));
    assert_eq!(cards[0].views.as_deref(), Some("1.2M"));
    assert_eq!(cards[0].episode_count.as_deref(), Some("80"));

    assert_eq!(cards[1].title, "No Link Yet");
    assert_eq!(cards[1].content_id, None);
    assert_eq!(cards[1].episode_count, None);
}

#[tokio::test]
async fn test_user_agent_sent_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", TEST_AGENT))
        .respond_with(html(FRONT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let ranking = create_client(&server).trending().await.unwrap();
    assert_eq!(ranking.len(), 2);
}

#[tokio::test]
async fn test_trending_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(FRONT_PAGE))
        .mount(&server)
        .await;

    let ranking = create_client(&server).trending().await.unwrap();

    assert_eq!(ranking.len(), 2);
    assert_eq!(ranking[0].rank.as_deref(), Some("1"));
    assert_eq!(ranking[0].title, "CEO's Secret Wife");
    assert_eq!(ranking[0].content_id.as_deref(), Some("41000200"));
    assert_eq!(ranking[0].views.as_deref(), Some("9.8M"));
    assert_eq!(ranking[0].episode_count.as_deref(), Some("64"));

    assert_eq!(ranking[1].rank.as_deref(), Some("2"));
    assert_eq!(ranking[1].content_id.as_deref(), Some("41000201"));
    assert_eq!(ranking[1].views, None);
}

#[tokio::test]
async fn test_search_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .and(query_param("lang", "in"))
        .and(query_param("q", "hidden heiress"))
        .respond_with(html(FRONT_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let results = create_client(&server).search("  hidden heiress ").await.unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].content_id.as_deref(), Some("41000119"));
    assert_eq!(results[0].views.as_deref(), Some("1.2M"));
    assert_eq!(results[0].episode_count, None);
    assert_eq!(results[0].rank, None);
}

#[tokio::test]
async fn test_search_with_no_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search.php"))
        .respond_with(html(r#"<html><body><div class="drama-grid"></div></body></html>"#))
        .mount(&server)
        .await;

    let results = create_client(&server).search("nothing matches").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_detail_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch.php"))
        .and(query_param("bookId", "41000119"))
        .and(query_param("lang", "in"))
        .respond_with(html(WATCH_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let detail = create_client(&server).detail("41000119").await.unwrap();

    assert_eq!(detail.content_id, "41000119");
    assert_eq!(detail.title, "Hidden Heiress");
    assert_eq!(
        detail.description,
        "A quiet heiress returns to claim her family's company."
    );
    assert_eq!(
        detail.thumbnail.as_deref(),
        Some("https://cdn.example.com/41000119-thumb.jpg")
    );
    assert_eq!(detail.upload_date.as_deref(), Some("2024-03-18"));
    assert_eq!(detail.stats.followers.as_deref(), Some("25K"));
    assert_eq!(detail.stats.total_episodes.as_deref(), Some("80"));
    assert_eq!(
        detail.episode_list,
        vec![
            EpisodeEntry { episode: 1, id: "1".to_string() },
            EpisodeEntry { episode: 2, id: "2".to_string() },
            EpisodeEntry { episode: 3, id: "3".to_string() },
        ]
    );
}

#[tokio::test]
async fn test_stream_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch.php"))
        .and(query_param("bookId", "41000119"))
        .and(query_param("episode", "1"))
        .respond_with(html(WATCH_PAGE))
        .expect(1)
        .mount(&server)
        .await;

    let info = create_client(&server).stream("41000119", "1").await.unwrap();

    assert_eq!(info.content_id, "41000119");
    assert_eq!(info.episode, "1");
    assert_eq!(
        info.video_url.as_deref(),
        Some("https://cdn.example.com/41000119/ep1.m3u8")
    );
}

#[tokio::test]
async fn test_stream_without_video_is_not_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch.php"))
        .respond_with(html("<html><body><p>Episode locked</p></body></html>"))
        .mount(&server)
        .await;

    let info = create_client(&server).stream("41000119", "80").await.unwrap();
    assert_eq!(info.video_url, None);
}

#[tokio::test]
async fn test_http_error_maps_to_extraction_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = create_client(&server).detail("41000119").await.unwrap_err();

    assert!(matches!(err, ScraperError::Extraction { .. }));
    let message = err.to_string();
    assert!(message.starts_with("Failed to get details for \"41000119\": Network Error:"));
    assert!(message.contains("500"));
}

#[tokio::test]
async fn test_timeout_maps_to_extraction_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html(FRONT_PAGE).set_delay(Duration::from_secs(3)))
        .mount(&server)
        .await;

    let mut config = create_test_config(&server.uri());
    config.http.timeout_secs = 1;
    let client = DramaboxClient::new(&config).unwrap();

    let err = client.latest().await.unwrap_err();
    assert!(err.to_string().starts_with("Failed to retrieve latest: Network Error: Request timeout"));
}

#[tokio::test]
async fn test_validation_issues_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html(FRONT_PAGE))
        .expect(0)
        .mount(&server)
        .await;

    let client = create_client(&server);

    assert!(client.search("").await.unwrap_err().is_validation());
    assert!(client.search("   ").await.unwrap_err().is_validation());
    assert!(client.detail("").await.unwrap_err().is_validation());
    assert!(client.stream("41000119", " ").await.unwrap_err().is_validation());

    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/watch.php"))
        .respond_with(html(WATCH_PAGE))
        .expect(3)
        .mount(&server)
        .await;

    let client = create_client(&server);
    let (a, b, c) = tokio::join!(
        client.stream("1", "1"),
        client.stream("2", "2"),
        client.stream("3", "3"),
    );

    assert_eq!(a.unwrap().content_id, "1");
    assert_eq!(b.unwrap().episode, "2");
    assert_eq!(c.unwrap().content_id, "3");
}

#[tokio::test]
async fn test_dispatch_envelopes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html(FRONT_PAGE))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/watch.php"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = create_client(&server);

    let envelope = dispatch(&client, &Route::Latest).await;
    assert!(envelope.status);
    assert_eq!(envelope.code, 200);
    assert_eq!(envelope.data.unwrap().as_array().unwrap().len(), 2);

    let envelope = dispatch(
        &client,
        &Route::Detail {
            book_id: "missing".to_string(),
        },
    )
    .await;
    assert!(!envelope.status);
    assert_eq!(envelope.code, 500);
    assert!(envelope.data.is_none());

    let envelope = dispatch(
        &client,
        &Route::Detail {
            book_id: String::new(),
        },
    )
    .await;
    assert_eq!(envelope.code, 400);
    assert_eq!(envelope.message, "Book ID cannot be empty");
}
