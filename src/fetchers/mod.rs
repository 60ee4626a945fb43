pub mod filmography_fetcher;
