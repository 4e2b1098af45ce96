// src/config/consts.rs

// Net config
pub const PAGE_TIMEOUT_SECS: u64 = 10;
pub const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";
pub const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
pub const ACCEPT_LANGUAGE: &str = "en-GB,en;q=0.5";

// Local log
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_FILTER: &str = "listing_scrape=info";
pub const LOG_FILTER_VERBOSE: &str = "listing_scrape=debug,info";

// Export
pub const STEM_MAX_CHARS: usize = 30;
pub const STEM_FALLBACK: &str = "product";

// Display
pub const THUMBNAIL_PX: u32 = 200;
pub const WINDOW_TITLE: &str = "Amazon Product Scraper";
