use std::fmt::Display;

use chrono::{DateTime, Datelike, TimeZone};

use crate::i18n::{translate, translate_args, Language};

const OWNER_NOTIFICATION: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="margin:0;padding:20px;background:#f5f5f5;font-family:Arial,sans-serif">
  <table role="presentation" width="700" cellpadding="0" cellspacing="0" style="width:700px;max-width:700px;background:#ffffff;margin:0 auto">
    <tbody>
      <tr>
        <td style="padding:24px 30px 20px 30px;background:#ffffff;border-bottom:4px double #2d6a4f">
          <table role="presentation" width="100%" cellpadding="0" cellspacing="0">
            <tbody>
              <tr>
                <td style="padding-bottom:8px;font-family:Georgia,'Times New Roman',serif;font-size:11px;text-transform:uppercase;letter-spacing:1px;color:#666;text-align:center">{{date}}</td>
              </tr>
              <tr>
                <td style="font-family:Georgia,'Times New Roman',serif;font-size:42px;font-weight:700;line-height:1.1;color:#2d6a4f;text-align:center">Portfolio Contact</td>
              </tr>
              <tr>
                <td style="padding-top:6px;font-family:Georgia,'Times New Roman',serif;font-size:13px;font-style:italic;color:#666;text-align:center">New message from your portfolio website</td>
              </tr>
              <tr>
                <td style="padding-top:12px;font-family:Arial,Helvetica,sans-serif;font-size:11px;color:#666;text-align:center"><span style="font-weight:600;color:#2d6a4f">NEW INQUIRY</span></td>
              </tr>
            </tbody>
          </table>
        </td>
      </tr>
      <tr>
        <td style="padding:20px 30px;background:#fafaf8;border-bottom:1px solid #e0e0e0">
          <table role="presentation" width="100%" cellpadding="0" cellspacing="0">
            <tbody>
              <tr>
                <td style="padding-bottom:8px;font-family:Arial,Helvetica,sans-serif;font-size:11px;font-weight:600;text-transform:uppercase;letter-spacing:1px;color:#2d6a4f">Contact Information</td>
              </tr>
              <tr>
                <td style="font-family:Georgia,'Times New Roman',serif;font-size:14px;line-height:1.6;color:#333">
                  <strong>Name:</strong> {{name}}<br>
                  <strong>Email:</strong> <a href="mailto:{{email}}" style="color:#2d6a4f;text-decoration:none">{{email}}</a>
                </td>
              </tr>
            </tbody>
          </table>
        </td>
      </tr>
      <tr>
        <td style="padding:30px 30px">
          <table role="presentation" width="100%" cellpadding="0" cellspacing="0">
            <tbody>
              <tr>
                <td style="padding:10px 0 6px 0;font-family:Arial,Helvetica,sans-serif;font-size:12px;letter-spacing:1px;text-transform:uppercase;color:#1b1b1b;border-top:2px solid #1b1b1b;border-bottom:1px solid #d8d2c7">Message</td>
              </tr>
              <tr>
                <td style="padding:16px 0 18px 0;font-family:Arial,Helvetica,sans-serif;font-size:14px;line-height:1.65;color:#2e2a25;white-space:pre-wrap">{{message}}</td>
              </tr>
            </tbody>
          </table>
        </td>
      </tr>
      <tr>
        <td style="padding:20px 30px;background:#fafaf8;border-top:3px double #2d6a4f;text-align:center">
          <p style="margin:0 0 8px 0;font-family:Georgia,'Times New Roman',serif;font-size:13px;color:#333">This message was sent via your portfolio contact form</p>
          <p style="margin:0;font-family:Arial,Helvetica,sans-serif;font-size:10px;color:#999">© {{year}} Portfolio · All rights reserved</p>
        </td>
      </tr>
    </tbody>
  </table>
</body>
</html>
"#;

const CONFIRMATION_SHELL: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
</head>
<body style="margin:0;padding:20px;background:#f5f5f5;font-family:Arial,sans-serif">
  <table role="presentation" width="700" cellpadding="0" cellspacing="0" style="width:700px;max-width:700px;background:#ffffff;margin:0 auto">
    <tbody>
      <tr>
        <td style="padding:24px 30px 20px 30px;background:#ffffff;border-bottom:4px double #2d6a4f">
          <table role="presentation" width="100%" cellpadding="0" cellspacing="0">
            <tbody>
              <tr>
                <td style="font-family:Georgia,'Times New Roman',serif;font-size:36px;font-weight:700;line-height:1.1;color:#2d6a4f;text-align:center">{{title}}</td>
              </tr>
              <tr>
                <td style="padding-top:6px;font-family:Georgia,'Times New Roman',serif;font-size:13px;font-style:italic;color:#666;text-align:center">{{tagline}}</td>
              </tr>
            </tbody>
          </table>
        </td>
      </tr>
      <tr>
        <td style="padding:30px;background:#fafaf8;font-family:Arial,Helvetica,sans-serif;font-size:14px;line-height:1.6;color:#333">{{body}}</td>
      </tr>
      <tr>
        <td style="padding:20px 30px;background:#fafaf8;border-top:3px double #2d6a4f;text-align:center">
          <p style="font-family:Arial,Helvetica,sans-serif;font-size:10px;color:#999;margin:0">© {{year}} {{rights}}</p>
        </td>
      </tr>
    </tbody>
  </table>
</body>
</html>
"#;

/// Fills `{{key}}` placeholders in a single pass; unknown keys are left as
/// they are. Values go in verbatim, without HTML escaping, so this is the
/// one place to change if submitted text must stop being treated as markup.
pub fn interpolate(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match vars.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push_str("{{");
                out.push_str(key);
                out.push_str("}}");
            }
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Date line and copyright year shown on every email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Letterhead {
    pub date: String,
    pub year: String,
}

impl Letterhead {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self
    where
        Tz::Offset: Display,
    {
        Self {
            date: now.format("%A, %B %-d, %Y").to_string(),
            year: now.year().to_string(),
        }
    }
}

pub fn owner_notification(letterhead: &Letterhead, name: &str, email: &str, message: &str) -> String {
    interpolate(
        OWNER_NOTIFICATION,
        &[
            ("date", letterhead.date.as_str()),
            ("year", letterhead.year.as_str()),
            ("name", name),
            ("email", email),
            ("message", message),
        ],
    )
}

/// Wraps an already rendered body in the confirmation header and footer.
pub fn confirmation(letterhead: &Letterhead, language: Language, title: &str, body: &str) -> String {
    interpolate(
        CONFIRMATION_SHELL,
        &[
            ("title", title),
            ("tagline", translate(language, "email.confirmationTagline").as_str()),
            ("body", body),
            ("year", letterhead.year.as_str()),
            ("rights", translate(language, "email.rights").as_str()),
        ],
    )
}

pub fn default_confirmation_body(language: Language, name: &str, owner_name: &str) -> String {
    let paragraph = r#"<p style="margin:0 0 16px 0">{{text}}</p>"#;
    let mut body = String::new();
    body.push_str(&interpolate(
        paragraph,
        &[("text", translate_args(language, "email.greeting", &[("name", name)]).as_str())],
    ));
    body.push_str(&interpolate(
        paragraph,
        &[("text", translate(language, "email.body").as_str())],
    ));
    body.push_str(&interpolate(
        r#"<p style="margin:0">{{signoff}}<br><strong style="color:#2d6a4f">{{owner}}</strong></p>"#,
        &[
            ("signoff", translate(language, "email.signoff").as_str()),
            ("owner", owner_name),
        ],
    ));
    body
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;

    fn letterhead() -> Letterhead {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            .and_utc();
        Letterhead::at::<Utc>(&now)
    }

    #[test]
    fn test_interpolate_single_pass() {
        assert_eq!(
            interpolate("{{a}}-{{b}}-{{c}}", &[("a", "{{b}}"), ("b", "2")]),
            "{{b}}-2-{{c}}"
        );
        assert_eq!(interpolate("tail {{open", &[("open", "x")]), "tail {{open");
    }

    #[test]
    fn test_letterhead_format() {
        let lh = letterhead();
        assert_eq!(lh.date, "Monday, October 19, 2026");
        assert_eq!(lh.year, "2026");
    }

    #[test]
    fn test_owner_notification_is_not_escaped() {
        let html = owner_notification(
            &letterhead(),
            "<b>Alice</b>",
            "alice@example.com",
            "Hello <script>",
        );
        assert!(html.contains("<strong>Name:</strong> <b>Alice</b>"));
        assert!(html.contains(r#"href="mailto:alice@example.com""#));
        assert!(html.contains("Hello <script>"));
        assert!(html.contains("Monday, October 19, 2026"));
        assert!(!html.contains("{{"));
    }

    #[test]
    fn test_default_confirmation_languages() {
        let en = default_confirmation_body(Language::En, "Alice", "Raphaël Martin");
        assert!(en.contains("Hi Alice,"));
        assert!(en.contains("Raphaël Martin"));
        let fr = default_confirmation_body(Language::Fr, "Alice", "Raphaël Martin");
        assert!(fr.contains("Bonjour Alice,"));

        let html = confirmation(&letterhead(), Language::En, "Thank You!", &en);
        assert!(html.contains("Your message has been received"));
        assert!(html.contains("© 2026 Portfolio · All rights reserved"));
    }
}
