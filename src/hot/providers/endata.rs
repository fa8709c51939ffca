use rand::Rng;
use serde::Deserialize;

use crate::hot::decode;
use crate::hot::error::HotError;
use crate::hot::normalize::format_hot_value;
use crate::hot::types::{HotItem, HotProvider, RequestSpec};

const MAINLAND_URL: &str = "https://ys.endata.cn/enlib-api/api/home/getrank_mainland.do";
const SINGLE_DAY_URL: &str = "https://ys.endata.cn/enlib-api/api/home/getrank_singleday.do";

/// Which EnData box-office board a `?t=` value selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Board {
    Mainland,
    SingleDay,
}

impl Board {
    /// `"s"` selects the single-day board; anything else (or nothing) is mainland all-time.
    pub fn from_variant(variant: Option<&str>) -> Self {
        match variant {
            Some("s") => Board::SingleDay,
            _ => Board::Mainland,
        }
    }

    fn url(self) -> &'static str {
        match self {
            Board::Mainland => MAINLAND_URL,
            Board::SingleDay => SINGLE_DAY_URL,
        }
    }

    fn flag(self) -> &'static str {
        match self {
            Board::Mainland => "endata_m",
            Board::SingleDay => "endata_s",
        }
    }

    fn type_code(self) -> &'static str {
        match self {
            Board::Mainland => "0",
            Board::SingleDay => "1",
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Shell {
    data: Data,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Data {
    table0: Vec<Movie>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Movie {
    movie_name: String,
    release_time: String,
    box_office: f64,
    irank: i64,
}

/// EnData (艺恩) box office, either board.
pub struct Endata;

impl HotProvider for Endata {
    fn id(&self) -> &'static str {
        "endata"
    }

    fn cache_flag(&self, variant: Option<&str>) -> String {
        Board::from_variant(variant).flag().to_string()
    }

    fn request(&self, variant: Option<&str>) -> RequestSpec {
        let board = Board::from_variant(variant);
        // cache-buster the site's own frontend sends
        let r: f64 = rand::rng().random::<f64>() * 0.1;
        let fields = vec![
            ("r".to_string(), format!("{r:.17}")),
            ("top".to_string(), "50".to_string()),
            ("type".to_string(), board.type_code().to_string()),
        ];
        RequestSpec::post_form(board.url(), fields)
    }

    fn parse(&self, body: &str) -> Result<Vec<HotItem>, HotError> {
        let shell: Shell = decode::json(body)?;
        Ok(shell
            .data
            .table0
            .into_iter()
            .map(|m| HotItem {
                title: m.movie_name,
                desc: m.release_time,
                hot_val: format_hot_value(m.box_office),
                pos: m.irank,
                ..Default::default()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hot::types::{Method, RequestBody};

    #[test]
    fn variant_selects_board_and_flag() {
        assert_eq!(Endata.cache_flag(Some("s")), "endata_s");
        assert_eq!(Endata.cache_flag(None), "endata_m");
        assert_eq!(Endata.cache_flag(Some("x")), "endata_m");

        let req = Endata.request(Some("s"));
        assert_eq!(req.method, Method::Post);
        assert_eq!(req.url, SINGLE_DAY_URL);
        let RequestBody::Form(fields) = req.body else {
            panic!("expected form body");
        };
        let get = |k: &str| {
            fields
                .iter()
                .find(|(name, _)| name == k)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("top"), "50");
        assert_eq!(get("type"), "1");
        let r: f64 = get("r").parse().unwrap();
        assert!((0.0..0.1).contains(&r));
    }

    #[test]
    fn box_office_is_scaled() {
        let body = r#"{"data":{"table0":[{"MovieName":"长津湖","ReleaseTime":"2021-09-30","BoxOffice":5775000000.0,"Irank":1}]}}"#;
        let items = Endata.parse(body).unwrap();
        assert_eq!(items[0].hot_val, "57.75亿");
        assert_eq!(items[0].pos, 1);
        assert_eq!(items[0].desc, "2021-09-30");
    }
}
