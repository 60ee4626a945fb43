use crate::{
    clients::imdb_client::ImdbClient,
    error::Result,
    extractors::imdb_extractor::{ActorEntry, ImdbExtractor},
    model::{
        movie::MovieRecord,
        table::{ActorColumn, Table},
    },
};

/// Walks the actor list page and every actor's filmography, one request at a time.
#[derive(Clone)]
pub struct FilmographyFetcher {
    imdb_client: ImdbClient,
    max_movies: usize,
}

impl FilmographyFetcher {
    pub fn new(imdb_client: ImdbClient, max_movies: usize) -> Self {
        FilmographyFetcher {
            imdb_client,
            max_movies,
        }
    }

    pub async fn get_table_for_list(&self, list_url: &str) -> Result<Table> {
        log::info!("Fetching actor list {}", list_url);
        let list_html = self.imdb_client.get_html_from_url(list_url).await?;
        let entries = ImdbExtractor::extract_actor_entries(&list_html);
        log::info!("Found {} actors", entries.len());

        let mut table = Table::default();
        for (index, entry) in entries.iter().enumerate() {
            log::info!(
                "Processing actor {}/{}: {}",
                index + 1,
                entries.len(),
                entry.name
            );
            table.push(self.get_actor_column(entry).await?);
        }

        Ok(table)
    }

    pub async fn get_actor_column(&self, entry: &ActorEntry) -> Result<ActorColumn> {
        let show_genres = match self.get_movie_from_url(&entry.show_url).await {
            Ok(show) => show.genres,
            Err(e) => {
                log::warn!("Could not read genres of show {}: {}", entry.show_name, e);
                None
            }
        };

        let actor_html = self.imdb_client.get_html_from_url(&entry.actor_url).await?;
        let movie_urls = ImdbExtractor::extract_filmography_links(&actor_html, self.max_movies);
        log::debug!("{} has {} titles to fetch", entry.name, movie_urls.len());

        let mut movies = Vec::with_capacity(movie_urls.len());
        for url in movie_urls {
            match self.get_movie_from_url(&url).await {
                Ok(movie) => {
                    log::debug!("Successfully fetched information for {:?}", movie.title);
                    movies.push(Some(movie));
                }
                Err(e) => {
                    log::warn!(
                        "Could not construct movie from url {}. Ignoring it and continuing. Error was: {}",
                        url,
                        e
                    );
                }
            }
        }

        Ok(ActorColumn::new(
            actor_label(entry, show_genres.as_deref()),
            movies,
        ))
    }

    async fn get_movie_from_url(&self, url: &str) -> Result<MovieRecord> {
        let html_body = self.imdb_client.get_html_from_url(url).await?;
        ImdbExtractor::extract_movie_from_html(&html_body, url)
    }
}

/// `"name, show, genre/genre"`; only the part before the first comma is shown on charts.
pub fn actor_label(entry: &ActorEntry, show_genres: Option<&[String]>) -> String {
    let genres = show_genres.map(|g| g.join("/")).unwrap_or_default();
    format!("{}, {}, {}", entry.name, entry.show_name, genres)
}
