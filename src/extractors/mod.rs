pub mod imdb_extractor;
