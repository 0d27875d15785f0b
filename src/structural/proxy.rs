// Pattern: Proxy
// A stand-in with the real object's interface that controls access to it:
// lazy loading, profiling, caching and permission checks.

use std::collections::HashSet;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::transcript::Transcript;

// ============================================================================
// Example: Virtual Proxy (lazy loading)
// ============================================================================

pub trait Image {
    fn display(&mut self, out: &mut Transcript);
}

pub struct RealImage {
    file_name: String,
}

impl RealImage {
    pub fn load(file_name: impl Into<String>, out: &mut Transcript) -> Self {
        let file_name = file_name.into();
        out.line(format!("Loading {file_name} from disk"));
        Self { file_name }
    }
}

impl Image for RealImage {
    fn display(&mut self, out: &mut Transcript) {
        out.line(format!("Displaying {}", self.file_name));
    }
}

pub struct ProxyImage {
    file_name: String,
    real: Option<RealImage>,
}

impl ProxyImage {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            real: None,
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.real.is_some()
    }
}

impl Image for ProxyImage {
    fn display(&mut self, out: &mut Transcript) {
        let file_name = &self.file_name;
        self.real
            .get_or_insert_with(|| RealImage::load(file_name.clone(), out))
            .display(out);
    }
}

// ============================================================================
// Example: Profiling Proxy
// ============================================================================

pub trait Action {
    fn perform_action(&self);
}

#[derive(Default)]
pub struct ExampleService {
    work: Duration,
}

impl ExampleService {
    pub fn with_work(work: Duration) -> Self {
        Self { work }
    }
}

impl Action for ExampleService {
    fn perform_action(&self) {
        if !self.work.is_zero() {
            std::thread::sleep(self.work);
        }
    }
}

pub struct ProfilingService<S> {
    inner: S,
}

impl<S: Action> ProfilingService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Run the wrapped action and return how long it took.
    pub fn perform_timed(&self) -> Duration {
        let started = Instant::now();
        self.inner.perform_action();
        started.elapsed()
    }
}

impl<S: Action> Action for ProfilingService<S> {
    fn perform_action(&self) {
        let elapsed = self.perform_timed();
        debug!(?elapsed, "profiled action");
    }
}

// ============================================================================
// Example: Caching Proxy
// ============================================================================

pub trait VideoDownloader {
    fn get_video(&mut self, url: &str, out: &mut Transcript);
}

/// Stands in for the real network client; only records what it was asked for.
#[derive(Default)]
pub struct MainVideoDownloader {
    pub started: Vec<String>,
}

impl VideoDownloader for MainVideoDownloader {
    fn get_video(&mut self, url: &str, out: &mut Transcript) {
        self.started.push(url.to_string());
        out.line(format!("Started downloading {url}"));
    }
}

#[derive(Default)]
pub struct SmartVideoDownloader {
    inner: MainVideoDownloader,
    in_flight: HashSet<String>,
}

impl SmartVideoDownloader {
    pub fn downloads_started(&self) -> usize {
        self.inner.started.len()
    }
}

impl VideoDownloader for SmartVideoDownloader {
    fn get_video(&mut self, url: &str, out: &mut Transcript) {
        if self.in_flight.insert(url.to_string()) {
            self.inner.get_video(url, out);
        } else {
            out.line(format!("We've already started downloading {url}"));
        }
    }
}

// ============================================================================
// Example: Protection Proxies
// ============================================================================

pub trait SensitiveOperation {
    fn perform_destructive_action(&self, out: &mut Transcript) -> bool;
}

pub struct DatabaseService;

impl SensitiveOperation for DatabaseService {
    fn perform_destructive_action(&self, out: &mut Transcript) -> bool {
        out.line("Database deleted.");
        true
    }
}

pub struct DatabaseServiceProxy {
    is_admin: bool,
    service: DatabaseService,
}

impl DatabaseServiceProxy {
    pub fn new(is_admin: bool, service: DatabaseService) -> Self {
        Self { is_admin, service }
    }
}

impl SensitiveOperation for DatabaseServiceProxy {
    fn perform_destructive_action(&self, out: &mut Transcript) -> bool {
        if !self.is_admin {
            out.line("You don't have admin access to delete this database.");
            return false;
        }
        self.service.perform_destructive_action(out)
    }
}

pub trait WebBrowser {
    fn go_to_site(&self, url: &str, out: &mut Transcript) -> bool;
}

pub struct DefaultWebBrowser;

impl WebBrowser for DefaultWebBrowser {
    fn go_to_site(&self, url: &str, out: &mut Transcript) -> bool {
        out.line(format!("Navigating to {url}"));
        true
    }
}

const BLOCKED_WEBSITES: [&str; 3] = ["www.youtube.com", "www.twitter.com", "www.facebook.com"];

pub struct ParentalControlBrowser<B> {
    inner: B,
}

impl<B: WebBrowser> ParentalControlBrowser<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }
}

impl<B: WebBrowser> WebBrowser for ParentalControlBrowser<B> {
    fn go_to_site(&self, url: &str, out: &mut Transcript) -> bool {
        if BLOCKED_WEBSITES.contains(&url) {
            out.line("This website is blocked.");
            return false;
        }
        self.inner.go_to_site(url, out)
    }
}

pub fn demo(out: &mut Transcript) {
    let mut image = ProxyImage::new("test_image.png");
    image.display(out);
    image.display(out);

    let profiled = ProfilingService::new(ExampleService::default());
    out.line(format!("Time Elapsed: {:?}", profiled.perform_timed()));

    let mut downloader = SmartVideoDownloader::default();
    downloader.get_video("https://videos.example/intro.mp4", out);
    downloader.get_video("https://videos.example/intro.mp4", out);

    DatabaseServiceProxy::new(false, DatabaseService).perform_destructive_action(out);
    DatabaseServiceProxy::new(true, DatabaseService).perform_destructive_action(out);

    let browser = ParentalControlBrowser::new(DefaultWebBrowser);
    browser.go_to_site("www.youtube.com", out);
    browser.go_to_site("www.rust-lang.org", out);
}
