/*! CMDI metadata records

A [Record] wraps a parsed metadata document of the newspaper text profile and answers a fixed set of queries on it.

Queries are step paths over elements of the `cmdp_text` namespace ([crate::config::CMDP_TEXT_NS]):
the first step matches at any depth, the following ones match direct children, and the value is the text of the last element.
This is the equivalent of `//cmdp_text:A/cmdp_text:B/cmdp_text:C/text()`.

Singular fields (title, description) take the first match and ignore the rest.
!*/
mod date;

use std::path::Path;

use chrono::NaiveDate;
use roxmltree::{Document, Node};
use serde::Serialize;

use crate::config::{CMDP_TEXT_NS, CMD_NS};
use crate::error::Error;

pub use date::parse_date;

const DATES: &[&str] = &["TemporalCoverage", "Start", "date"];
const DESCRIPTION: &[&str] = &["TextResource", "Description", "description"];
const TITLE: &[&str] = &["TextResource", "TitleInfo", "title"];
const RESOURCE_IDS: &[&str] = &["SubresourceDescription", "IdentificationInfo", "identifier"];
const SUBRESOURCE: &[&str] = &["SubresourceDescription"];
const ISSUE_IDS: &[&str] = &["IdentificationInfo", "identifier"];
const ISSUE_START: &[&str] = &["TemporalCoverage", "Start", "date"];

/// A newspaper issue, as described by a subresource of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub id: String,
    pub date: NaiveDate,
}

/// Everything a record tells about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fields {
    pub title: Option<String>,
    pub description: Option<String>,
    pub dates: Vec<NaiveDate>,
    pub resource_ids: Vec<String>,
}

pub struct Record<'input> {
    doc: Document<'input>,
}

impl<'input> Record<'input> {
    /// Parse a record. The root element has to be in the CMDI namespace ([crate::config::CMD_NS]).
    pub fn parse(text: &'input str) -> Result<Self, Error> {
        let doc = Document::parse(text)?;
        let root = doc.root_element().tag_name();
        if root.namespace() != Some(CMD_NS) {
            return Err(Error::Custom(format!(
                "not a CMDI record: root element is {:?} in {:?}",
                root.name(),
                root.namespace()
            )));
        }
        Ok(Self { doc })
    }

    /// Raw XML of the record.
    pub fn source(&self) -> &'input str {
        self.doc.input_text()
    }

    /// Start dates of the temporal coverage.
    ///
    /// Fails on the first date that does not parse.
    pub fn dates(&self) -> Result<Vec<NaiveDate>, Error> {
        self.texts(DATES).into_iter().map(parse_date).collect()
    }

    pub fn description(&self) -> Option<&str> {
        self.texts(DESCRIPTION).into_iter().next()
    }

    pub fn title(&self) -> Option<&str> {
        self.texts(TITLE).into_iter().next()
    }

    /// Identifiers of the subresources, keeping only the numeric ones.
    pub fn resource_ids(&self) -> Vec<&str> {
        self.texts(RESOURCE_IDS)
            .into_iter()
            .filter(|id| is_numeric(id))
            .collect()
    }

    /// Identifier and start date of each described issue.
    ///
    /// Subresource descriptions that lack a numeric identifier or a start date are skipped.
    pub fn issues(&self) -> Result<Vec<Issue>, Error> {
        let mut issues = Vec::new();
        for description in select(self.doc.root(), SUBRESOURCE, true) {
            if let Some(issue) = issue_from_description(description)? {
                issues.push(issue);
            }
        }
        Ok(issues)
    }

    pub fn fields(&self) -> Result<Fields, Error> {
        Ok(Fields {
            title: self.title().map(String::from),
            description: self.description().map(String::from),
            dates: self.dates()?,
            resource_ids: self.resource_ids().into_iter().map(String::from).collect(),
        })
    }

    fn texts(&self, steps: &[&str]) -> Vec<&str> {
        select(self.doc.root(), steps, true)
            .into_iter()
            .filter_map(|n| n.text())
            .collect()
    }
}

/// Read a record file and hand its parsed form to `f`.
///
/// [Record] borrows its text, so this keeps the file content alive for the duration of `f`.
pub fn with_record<T, F>(path: &Path, f: F) -> Result<T, Error>
where
    F: FnOnce(&Record) -> Result<T, Error>,
{
    let text = std::fs::read_to_string(path)?;
    let record = Record::parse(&text)?;
    f(&record)
}

fn issue_from_description(description: Node) -> Result<Option<Issue>, Error> {
    let ids = select(description, ISSUE_IDS, false);
    let start = select(description, ISSUE_START, false)
        .into_iter()
        .next()
        .and_then(|n| n.text());

    let start = match start {
        Some(s) if !ids.is_empty() => s,
        _ => return Ok(None),
    };

    match ids.iter().filter_map(|n| n.text()).find(|id| is_numeric(id)) {
        Some(id) => Ok(Some(Issue {
            id: id.to_string(),
            date: parse_date(start)?,
        })),
        None => Ok(None),
    }
}

/// Elements reached from `from` by following `steps`.
///
/// When `anywhere` is set the first step matches descendants at any depth, otherwise only children.
fn select<'a, 'input>(
    from: Node<'a, 'input>,
    steps: &[&str],
    anywhere: bool,
) -> Vec<Node<'a, 'input>> {
    let (first, rest) = match steps.split_first() {
        Some(s) => s,
        None => return vec![from],
    };

    let mut nodes: Vec<Node> = if anywhere {
        from.descendants()
            .filter(|n| is_profile_element(n, first))
            .collect()
    } else {
        from.children()
            .filter(|n| is_profile_element(n, first))
            .collect()
    };

    for step in rest {
        nodes = nodes
            .iter()
            .flat_map(|n| n.children().filter(|c| is_profile_element(c, step)))
            .collect();
    }
    nodes
}

#[inline]
fn is_profile_element(node: &Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && node.tag_name().namespace() == Some(CMDP_TEXT_NS)
}

#[inline]
fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_numeric)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::Error;

    fn record(components: &str) -> String {
        format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<cmd:CMD xmlns:cmd="http://www.clarin.eu/cmd/1"
         xmlns:cmdp_text="http://www.clarin.eu/cmd/1/profiles/clarin.eu:cr1:p_1633000337997"
         CMDVersion="1.2">
  <cmd:Header><cmd:MdSelfLink>http://hdl.handle.net/1/2</cmd:MdSelfLink></cmd:Header>
  <cmd:Components>
    <cmdp_text:TextResource>
{}
    </cmdp_text:TextResource>
  </cmd:Components>
</cmd:CMD>"#,
            components
        )
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const FULL: &str = r#"
      <cmdp_text:TitleInfo><cmdp_text:title>Kurjer Warszawski</cmdp_text:title></cmdp_text:TitleInfo>
      <cmdp_text:TitleInfo><cmdp_text:title>Second title</cmdp_text:title></cmdp_text:TitleInfo>
      <cmdp_text:Description><cmdp_text:description>Daily newspaper</cmdp_text:description></cmdp_text:Description>
      <cmdp_text:TemporalCoverage>
        <cmdp_text:Start><cmdp_text:date>1920-1-1</cmdp_text:date></cmdp_text:Start>
      </cmdp_text:TemporalCoverage>
      <cmdp_text:SubresourceDescription>
        <cmdp_text:IdentificationInfo>
          <cmdp_text:identifier>http://data.europeana.eu/item/9200357/abc</cmdp_text:identifier>
          <cmdp_text:identifier>456</cmdp_text:identifier>
        </cmdp_text:IdentificationInfo>
        <cmdp_text:TemporalCoverage>
          <cmdp_text:Start><cmdp_text:date>1920-3-5</cmdp_text:date></cmdp_text:Start>
        </cmdp_text:TemporalCoverage>
      </cmdp_text:SubresourceDescription>
      <cmdp_text:SubresourceDescription>
        <cmdp_text:IdentificationInfo>
          <cmdp_text:identifier>789</cmdp_text:identifier>
        </cmdp_text:IdentificationInfo>
        <cmdp_text:TemporalCoverage>
          <cmdp_text:Start><cmdp_text:date>1921-12-24</cmdp_text:date></cmdp_text:Start>
        </cmdp_text:TemporalCoverage>
      </cmdp_text:SubresourceDescription>
      <cmdp_text:SubresourceDescription>
        <cmdp_text:IdentificationInfo>
          <cmdp_text:identifier>1000</cmdp_text:identifier>
        </cmdp_text:IdentificationInfo>
      </cmdp_text:SubresourceDescription>
"#;

    #[test]
    fn title_and_description() {
        let xml = record(FULL);
        let r = Record::parse(&xml).unwrap();
        assert_eq!(r.title(), Some("Kurjer Warszawski"));
        assert_eq!(r.description(), Some("Daily newspaper"));
    }

    #[test]
    fn absent_fields() {
        let xml = record("");
        let r = Record::parse(&xml).unwrap();
        assert_eq!(r.title(), None);
        assert_eq!(r.description(), None);
        assert!(r.dates().unwrap().is_empty());
        assert!(r.resource_ids().is_empty());
        assert!(r.issues().unwrap().is_empty());
    }

    #[test]
    fn other_namespace_is_ignored() {
        let xml = record(
            r#"<cmd:TitleInfo><cmd:title>wrong</cmd:title></cmd:TitleInfo>
               <TitleInfo><title>also wrong</title></TitleInfo>"#,
        );
        let r = Record::parse(&xml).unwrap();
        assert_eq!(r.title(), None);
    }

    #[test]
    fn dates_in_document_order() {
        let xml = record(FULL);
        let r = Record::parse(&xml).unwrap();
        assert_eq!(
            r.dates().unwrap(),
            vec![ymd(1920, 1, 1), ymd(1920, 3, 5), ymd(1921, 12, 24)]
        );
    }

    #[test]
    fn bad_date_fails_whole_call() {
        let xml = record(
            r#"<cmdp_text:TemporalCoverage>
                 <cmdp_text:Start><cmdp_text:date>1920-1-1</cmdp_text:date></cmdp_text:Start>
               </cmdp_text:TemporalCoverage>
               <cmdp_text:TemporalCoverage>
                 <cmdp_text:Start><cmdp_text:date>circa 1920</cmdp_text:date></cmdp_text:Start>
               </cmdp_text:TemporalCoverage>"#,
        );
        let r = Record::parse(&xml).unwrap();
        assert!(matches!(r.dates(), Err(Error::DateParse(_))));
        assert!(r.fields().is_err());
    }

    #[test]
    fn numeric_resource_ids_only() {
        let xml = record(
            r#"<cmdp_text:SubresourceDescription>
                 <cmdp_text:IdentificationInfo>
                   <cmdp_text:identifier>3</cmdp_text:identifier>
                   <cmdp_text:identifier>x3</cmdp_text:identifier>
                   <cmdp_text:identifier>12</cmdp_text:identifier>
                   <cmdp_text:identifier>1.5</cmdp_text:identifier>
                   <cmdp_text:identifier>-1</cmdp_text:identifier>
                   <cmdp_text:identifier></cmdp_text:identifier>
                   <cmdp_text:identifier>007</cmdp_text:identifier>
                 </cmdp_text:IdentificationInfo>
               </cmdp_text:SubresourceDescription>"#,
        );
        let r = Record::parse(&xml).unwrap();
        assert_eq!(r.resource_ids(), vec!["3", "12", "007"]);
    }

    #[test]
    fn non_ascii_numerals_are_numeric() {
        let xml = record(
            r#"<cmdp_text:SubresourceDescription>
                 <cmdp_text:IdentificationInfo>
                   <cmdp_text:identifier>½</cmdp_text:identifier>
                   <cmdp_text:identifier>Ⅻ</cmdp_text:identifier>
                   <cmdp_text:identifier>١٢</cmdp_text:identifier>
                   <cmdp_text:identifier>١a</cmdp_text:identifier>
                 </cmdp_text:IdentificationInfo>
                 <cmdp_text:TemporalCoverage>
                   <cmdp_text:Start><cmdp_text:date>1920-3-5</cmdp_text:date></cmdp_text:Start>
                 </cmdp_text:TemporalCoverage>
               </cmdp_text:SubresourceDescription>
               <cmdp_text:SubresourceDescription>
                 <cmdp_text:IdentificationInfo>
                   <cmdp_text:identifier>abc</cmdp_text:identifier>
                   <cmdp_text:identifier>١٢</cmdp_text:identifier>
                 </cmdp_text:IdentificationInfo>
                 <cmdp_text:TemporalCoverage>
                   <cmdp_text:Start><cmdp_text:date>1920-3-6</cmdp_text:date></cmdp_text:Start>
                 </cmdp_text:TemporalCoverage>
               </cmdp_text:SubresourceDescription>"#,
        );
        let r = Record::parse(&xml).unwrap();
        assert_eq!(r.resource_ids(), vec!["½", "Ⅻ", "١٢", "١٢"]);
        assert_eq!(
            r.issues().unwrap(),
            vec![
                Issue {
                    id: "½".to_string(),
                    date: ymd(1920, 3, 5)
                },
                Issue {
                    id: "١٢".to_string(),
                    date: ymd(1920, 3, 6)
                },
            ]
        );
    }

    #[test]
    fn issues() {
        let xml = record(FULL);
        let r = Record::parse(&xml).unwrap();
        assert_eq!(
            r.issues().unwrap(),
            vec![
                Issue {
                    id: "456".to_string(),
                    date: ymd(1920, 3, 5)
                },
                Issue {
                    id: "789".to_string(),
                    date: ymd(1921, 12, 24)
                },
            ]
        );
    }

    #[test]
    fn issue_without_numeric_id_is_skipped() {
        let xml = record(
            r#"<cmdp_text:SubresourceDescription>
                 <cmdp_text:IdentificationInfo>
                   <cmdp_text:identifier>abc</cmdp_text:identifier>
                 </cmdp_text:IdentificationInfo>
                 <cmdp_text:TemporalCoverage>
                   <cmdp_text:Start><cmdp_text:date>not a date</cmdp_text:date></cmdp_text:Start>
                 </cmdp_text:TemporalCoverage>
               </cmdp_text:SubresourceDescription>"#,
        );
        let r = Record::parse(&xml).unwrap();
        assert!(r.issues().unwrap().is_empty());
    }

    #[test]
    fn fields() {
        let xml = record(FULL);
        let r = Record::parse(&xml).unwrap();
        let f = r.fields().unwrap();
        assert_eq!(f.title.as_deref(), Some("Kurjer Warszawski"));
        assert_eq!(f.resource_ids, vec!["456", "789", "1000"]);

        let json = serde_json::to_value(&f).unwrap();
        assert_eq!(json["dates"][1], "1920-03-05");
    }

    #[test]
    fn source_is_kept() {
        let xml = record(FULL);
        let r = Record::parse(&xml).unwrap();
        assert_eq!(r.source(), xml);
    }

    #[test]
    fn not_cmdi() {
        let xml = r#"<record xmlns="http://www.openarchives.org/OAI/2.0/"><title>t</title></record>"#;
        assert!(matches!(Record::parse(xml), Err(Error::Custom(_))));
    }

    #[test]
    fn not_xml() {
        assert!(matches!(Record::parse("<cmd:CMD>"), Err(Error::Xml(_))));
    }

    #[test]
    fn from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("record.xml");
        std::fs::write(&path, record(FULL)).unwrap();
        let title = with_record(&path, |r| Ok(r.title().map(String::from))).unwrap();
        assert_eq!(title.as_deref(), Some("Kurjer Warszawski"));
    }
}
