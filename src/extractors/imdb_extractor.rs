use select::{
    document::Document,
    node::Node,
    predicate::{And, Attr, Class, Name},
};

use crate::{
    clients::imdb_client::ImdbClient,
    error::{Error, Result},
    model::movie::MovieRecord,
};

/// One entry of the actor list page.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorEntry {
    pub name: String,
    pub show_name: String,
    pub show_url: String,
    pub actor_url: String,
}

#[derive(Debug)]
pub struct ImdbExtractor {}

impl ImdbExtractor {
    pub fn extract_movie_from_html(html_body: &str, url: &str) -> Result<MovieRecord> {
        let document = Document::from(html_body);

        let title = ImdbExtractor::extract_title(&document).ok_or_else(|| Error::Extraction {
            what: "title",
            url: url.to_string(),
        })?;

        Ok(MovieRecord {
            title: Some(title),
            year_range: ImdbExtractor::extract_year(&document),
            box_office: ImdbExtractor::extract_box_office(&document),
            genres: ImdbExtractor::extract_genres(&document),
            rating: ImdbExtractor::extract_rating(&document),
        })
    }

    fn extract_title(document: &Document) -> Option<String> {
        document
            .find(And(
                Name("h1"),
                Attr("data-testid", "hero-title-block__title"),
            ))
            .map(|n| n.text())
            .next()
    }

    fn extract_year(document: &Document) -> Option<String> {
        document
            .find(And(
                Name("span"),
                And(Class("sc-52284603-2"), Class("iTRONr")),
            ))
            .map(|n| n.text().trim().to_string())
            .next()
    }

    // The section lists "Gross US & Canada" first; its value sits in a nested list.
    fn extract_box_office(document: &Document) -> Option<String> {
        let section = document
            .find(And(
                Name("div"),
                Attr("data-testid", "title-boxoffice-section"),
            ))
            .next()?;

        let value = first(section, "ul")
            .and_then(|ul| first(ul, "li"))
            .and_then(|li| first(li, "div"))
            .and_then(|div| first(div, "ul"))
            .and_then(|ul| first(ul, "li"))?;

        Some(value.text().trim().to_string())
    }

    fn extract_genres(document: &Document) -> Option<Vec<String>> {
        document
            .find(And(Name("div"), Attr("data-testid", "genres")))
            .map(|n| n.find(Name("a")).map(|a| a.text()).collect())
            .next()
    }

    fn extract_rating(document: &Document) -> Option<String> {
        document
            .find(And(
                Name("div"),
                Attr("data-testid", "hero-rating-bar__aggregate-rating__score"),
            ))
            .flat_map(|n| first(n, "span"))
            .map(|span| span.text())
            .next()
    }

    pub fn extract_actor_entries(list_page_html: &str) -> Vec<ActorEntry> {
        Document::from(list_page_html)
            .find(And(Name("div"), Class("lister-item-content")))
            .flat_map(|item| {
                let actor_link = first(item, "h3").and_then(|h3| first(h3, "a"))?;
                let show_link = first(item, "p").and_then(|p| first(p, "a"))?;

                Some(ActorEntry {
                    name: collapse_whitespace(&actor_link.text()),
                    show_name: collapse_whitespace(&show_link.text()),
                    show_url: ImdbClient::absolute_url(show_link.attr("href")?),
                    actor_url: ImdbClient::absolute_url(actor_link.attr("href")?),
                })
            })
            .collect()
    }

    /// Title page links from the first filmography section, odd rows before even rows.
    pub fn extract_filmography_links(actor_page_html: &str, limit: usize) -> Vec<String> {
        let document = Document::from(actor_page_html);
        let Some(section) = document
            .find(And(Name("div"), Class("filmo-category-section")))
            .next()
        else {
            return vec![];
        };

        let row_links = |parity: &'static str| {
            section
                .find(And(Name("div"), And(Class("filmo-row"), Class(parity))))
                .flat_map(|row| first(row, "a"))
                .flat_map(|a| a.attr("href"))
                .map(ImdbClient::absolute_url)
                .collect::<Vec<_>>()
        };

        let mut links = row_links("odd");
        links.extend(row_links("even"));
        links.truncate(limit);
        links
    }
}

fn first<'a>(node: Node<'a>, tag: &str) -> Option<Node<'a>> {
    node.find(Name(tag)).next()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE_PAGE: &str = r#"
        <html><body>
          <h1 data-testid="hero-title-block__title">Descendants</h1>
          <ul><li><span class="sc-52284603-2 iTRONr">2015</span></li></ul>
          <div data-testid="hero-rating-bar__aggregate-rating__score"><span>6.3</span><span>/10</span></div>
          <div data-testid="genres">
            <a href="/search/?genres=adventure">Adventure</a>
            <a href="/search/?genres=comedy">Comedy</a>
          </div>
          <div data-testid="title-boxoffice-section">
            <ul>
              <li>
                <span>Gross US &amp; Canada</span>
                <div><ul><li>$124,910</li></ul></div>
              </li>
              <li>
                <span>Opening weekend</span>
                <div><ul><li>$8,000</li></ul></div>
              </li>
            </ul>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_every_field_of_a_title_page() {
        let movie = ImdbExtractor::extract_movie_from_html(TITLE_PAGE, "u").unwrap();

        assert_eq!(
            movie,
            MovieRecord {
                title: Some("Descendants".to_string()),
                year_range: Some("2015".to_string()),
                box_office: Some("$124,910".to_string()),
                genres: Some(vec!["Adventure".to_string(), "Comedy".to_string()]),
                rating: Some("6.3".to_string()),
            }
        );
    }

    #[test]
    fn optional_fields_are_none_when_missing() {
        let html = r#"<h1 data-testid="hero-title-block__title">Untitled Project</h1>"#;

        let movie = ImdbExtractor::extract_movie_from_html(html, "u").unwrap();

        assert_eq!(movie.title.as_deref(), Some("Untitled Project"));
        assert_eq!(movie.year_range, None);
        assert_eq!(movie.box_office, None);
        assert_eq!(movie.genres, None);
        assert_eq!(movie.rating, None);
    }

    #[test]
    fn missing_title_is_an_error() {
        let result = ImdbExtractor::extract_movie_from_html("<p>nothing</p>", "https://x/");

        assert!(matches!(
            result,
            Err(Error::Extraction { what: "title", .. })
        ));
    }

    #[test]
    fn extracts_actor_entries_from_list_page() {
        let html = r#"
            <div class="lister-item-content">
              <h3 class="lister-item-header"><a href="/name/nm1/">
                Dove   Cameron
              </a></h3>
              <p class="text-muted">Actress | <a href="/title/tt2/"> Liv and Maddie </a></p>
            </div>
            <div class="lister-item-content"><h3>no link</h3></div>
        "#;

        let entries = ImdbExtractor::extract_actor_entries(html);

        assert_eq!(
            entries,
            vec![ActorEntry {
                name: "Dove Cameron".to_string(),
                show_name: "Liv and Maddie".to_string(),
                show_url: "https://www.imdb.com/title/tt2/".to_string(),
                actor_url: "https://www.imdb.com/name/nm1/".to_string(),
            }]
        );
    }

    #[test]
    fn filmography_links_put_odd_rows_first_and_respect_limit() {
        let html = r#"
            <div class="filmo-category-section">
              <div class="filmo-row odd"><b><a href="/title/tt1/">One</a></b></div>
              <div class="filmo-row even"><b><a href="/title/tt2/">Two</a></b></div>
              <div class="filmo-row odd"><b><a href="/title/tt3/">Three</a></b></div>
              <div class="filmo-row even"><b><a href="/title/tt4/">Four</a></b></div>
            </div>
        "#;

        assert_eq!(
            ImdbExtractor::extract_filmography_links(html, 3),
            vec![
                "https://www.imdb.com/title/tt1/",
                "https://www.imdb.com/title/tt3/",
                "https://www.imdb.com/title/tt2/",
            ]
        );
    }

    #[test]
    fn no_filmography_section_means_no_links() {
        assert!(ImdbExtractor::extract_filmography_links("<div></div>", 50).is_empty());
    }
}
