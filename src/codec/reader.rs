//! Document reader: tag-delimited bytes -> folder tree.
//!
//! A hand-rolled recursive-descent parser.  Fields are recognized by
//! element name; unrecognized elements are skipped whole so that
//! documents carrying extra fields still decode.
//!
//! Error split:
//! - `Structure` — the document shape is wrong: mismatched nesting,
//!   missing required field, trailing garbage, truncated input.
//! - `Format` — the shape is fine but a value is not: unknown
//!   relationship tag, unparsable timestamp.

use chrono::{DateTime, Utc};

use crate::errors::{ContactVaultError, Result};
use crate::model::{Contact, Folder, Relationship};

/// Decode a document produced by [`super::encode`] back into a tree.
pub fn decode(bytes: &[u8]) -> Result<Folder> {
    let text = std::str::from_utf8(bytes)
        .map_err(|_| structure("document is not valid UTF-8"))?;

    let mut p = Parser::new(text);

    let tag = p.read_open()?;
    if tag != "Folder" {
        return Err(structure(format!(
            "expected <Folder> at document root, found <{tag}>"
        )));
    }
    let root = read_folder_body(&mut p)?;
    p.read_close("Folder")?;

    p.skip_whitespace();
    if !p.at_end() {
        return Err(structure("trailing data after root element"));
    }

    Ok(root)
}

fn structure(msg: impl Into<String>) -> ContactVaultError {
    ContactVaultError::Structure(msg.into())
}

fn parse_timestamp(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| ContactVaultError::Format(format!("bad timestamp in <{field}>: {e}")))
}

// ---------------------------------------------------------------------------
// Element bodies
// ---------------------------------------------------------------------------

/// Read the contents of a `<Folder>` element.  The caller has already
/// consumed the open tag and will consume the close tag.
fn read_folder_body(p: &mut Parser<'_>) -> Result<Folder> {
    let mut name = None;
    let mut created_at = None;
    let mut modified_at = None;
    let mut folders = None;
    let mut contacts = None;

    while !p.at_closing_tag() {
        let tag = p.read_open()?;
        match tag {
            "Name" => {
                name = Some(p.read_text()?);
                p.read_close("Name")?;
            }
            "CreationDate" => {
                created_at = Some(parse_timestamp(tag, &p.read_text()?)?);
                p.read_close("CreationDate")?;
            }
            "ModificationDate" => {
                modified_at = Some(parse_timestamp(tag, &p.read_text()?)?);
                p.read_close("ModificationDate")?;
            }
            "SubFolders" => {
                let mut list = Vec::new();
                while !p.at_closing_tag() {
                    let inner = p.read_open()?;
                    if inner != "Folder" {
                        return Err(structure(format!(
                            "expected <Folder> inside <SubFolders>, found <{inner}>"
                        )));
                    }
                    list.push(read_folder_body(p)?);
                    p.read_close("Folder")?;
                }
                p.read_close("SubFolders")?;
                folders = Some(list);
            }
            "Contacts" => {
                let mut list = Vec::new();
                while !p.at_closing_tag() {
                    let inner = p.read_open()?;
                    if inner != "Contact" {
                        return Err(structure(format!(
                            "expected <Contact> inside <Contacts>, found <{inner}>"
                        )));
                    }
                    list.push(read_contact_body(p)?);
                    p.read_close("Contact")?;
                }
                p.read_close("Contacts")?;
                contacts = Some(list);
            }
            // Forward compatibility: skip fields we do not know about.
            other => p.skip_element(other)?,
        }
    }

    Ok(Folder {
        name: name.ok_or_else(|| structure("<Folder> missing <Name>"))?,
        created_at: created_at.ok_or_else(|| structure("<Folder> missing <CreationDate>"))?,
        modified_at: modified_at
            .ok_or_else(|| structure("<Folder> missing <ModificationDate>"))?,
        folders,
        contacts,
    })
}

/// Read the contents of a `<Contact>` element.
fn read_contact_body(p: &mut Parser<'_>) -> Result<Contact> {
    let mut last_name = None;
    let mut first_name = None;
    let mut email = None;
    let mut company = None;
    let mut relationship = None;
    let mut created_at = None;
    let mut modified_at = None;

    while !p.at_closing_tag() {
        let tag = p.read_open()?;
        match tag {
            "LastName" => {
                last_name = Some(p.read_text()?);
                p.read_close("LastName")?;
            }
            "FirstName" => {
                first_name = Some(p.read_text()?);
                p.read_close("FirstName")?;
            }
            "Email" => {
                email = Some(p.read_text()?);
                p.read_close("Email")?;
            }
            "Company" => {
                company = Some(p.read_text()?);
                p.read_close("Company")?;
            }
            "Link" => {
                relationship = Some(p.read_text()?.parse::<Relationship>()?);
                p.read_close("Link")?;
            }
            "CreationDate" => {
                created_at = Some(parse_timestamp(tag, &p.read_text()?)?);
                p.read_close("CreationDate")?;
            }
            "ModificationDate" => {
                modified_at = Some(parse_timestamp(tag, &p.read_text()?)?);
                p.read_close("ModificationDate")?;
            }
            other => p.skip_element(other)?,
        }
    }

    Ok(Contact {
        last_name: last_name.ok_or_else(|| structure("<Contact> missing <LastName>"))?,
        first_name: first_name.ok_or_else(|| structure("<Contact> missing <FirstName>"))?,
        email: email.ok_or_else(|| structure("<Contact> missing <Email>"))?,
        company: company.ok_or_else(|| structure("<Contact> missing <Company>"))?,
        relationship: relationship.ok_or_else(|| structure("<Contact> missing <Link>"))?,
        created_at: created_at.ok_or_else(|| structure("<Contact> missing <CreationDate>"))?,
        modified_at: modified_at
            .ok_or_else(|| structure("<Contact> missing <ModificationDate>"))?,
    })
}

// ---------------------------------------------------------------------------
// Low-level parser
// ---------------------------------------------------------------------------

/// Cursor over the document text.  Whitespace between elements is
/// insignificant; whitespace inside text content is preserved.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        let trimmed = rest.trim_start();
        self.pos += rest.len() - trimmed.len();
    }

    /// True when the next token is a closing tag.  Returns false at end
    /// of input so callers fall through to `read_open` and get a proper
    /// truncation error.
    fn at_closing_tag(&mut self) -> bool {
        self.skip_whitespace();
        self.rest().starts_with("</")
    }

    /// Consume `<Name>` and return the element name.
    fn read_open(&mut self) -> Result<&'a str> {
        self.skip_whitespace();
        let rest = self.rest();

        let Some(after) = rest.strip_prefix('<') else {
            if rest.is_empty() {
                return Err(structure("unexpected end of document"));
            }
            return Err(structure("expected an element, found text content"));
        };
        if after.starts_with('/') {
            return Err(structure("unexpected closing tag"));
        }

        let end = after
            .find('>')
            .ok_or_else(|| structure("unterminated tag"))?;
        let name = &after[..end];
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(structure(format!("invalid element name '{name}'")));
        }

        self.pos += 1 + end + 1;
        Ok(name)
    }

    /// Consume `</expected>`.
    fn read_close(&mut self, expected: &str) -> Result<()> {
        self.skip_whitespace();
        let rest = self.rest();

        let after = rest
            .strip_prefix("</")
            .ok_or_else(|| structure(format!("expected </{expected}>")))?;
        let end = after
            .find('>')
            .ok_or_else(|| structure("unterminated tag"))?;
        let name = &after[..end];
        if name != expected {
            return Err(structure(format!(
                "mismatched nesting: expected </{expected}>, found </{name}>"
            )));
        }

        self.pos += 2 + end + 1;
        Ok(())
    }

    /// Consume text content up to the next tag and unescape entities.
    fn read_text(&mut self) -> Result<String> {
        let rest = self.rest();
        let end = rest
            .find('<')
            .ok_or_else(|| structure("unexpected end of document inside text content"))?;
        self.pos += end;
        unescape(&rest[..end])
    }

    /// Consume the balanced contents of an already-opened element,
    /// including its closing tag.  Used to skip unknown fields.
    fn skip_element(&mut self, name: &str) -> Result<()> {
        let mut depth = 1usize;
        while depth > 0 {
            let rest = self.rest();
            let lt = rest
                .find('<')
                .ok_or_else(|| structure(format!("unterminated <{name}> element")))?;
            self.pos += lt;

            let rest = self.rest();
            let gt = rest
                .find('>')
                .ok_or_else(|| structure("unterminated tag"))?;
            if rest.starts_with("</") {
                depth -= 1;
            } else {
                depth += 1;
            }
            self.pos += gt + 1;
        }
        Ok(())
    }
}

fn unescape(raw: &str) -> Result<String> {
    if !raw.contains('&') {
        return Ok(raw.to_string());
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(i) = rest.find('&') {
        out.push_str(&rest[..i]);
        rest = &rest[i..];

        let semi = rest
            .find(';')
            .ok_or_else(|| ContactVaultError::Format("unterminated entity".into()))?;
        match &rest[1..semi] {
            "amp" => out.push('&'),
            "lt" => out.push('<'),
            "gt" => out.push('>'),
            "quot" => out.push('"'),
            "apos" => out.push('\''),
            other => {
                return Err(ContactVaultError::Format(format!(
                    "unknown entity '&{other};'"
                )))
            }
        }
        rest = &rest[semi + 1..];
    }
    out.push_str(rest);
    Ok(out)
}
