//! Email template renderer
//!
//! One enum variant per template, each carrying its own typed data, rendered
//! by a pure function. The enum is exhaustive, so "unknown template" cannot
//! occur at runtime. Every user-controlled string is HTML-escaped before
//! interpolation.

/// Escape the HTML-significant characters in user-controlled text
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

/// Outbound email templates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailTemplate {
    /// Verification code email with a magic link fallback
    VerificationCode {
        code: String,
        expires_minutes: i64,
        magic_link: String,
    },

    /// Onboarding confirmation
    Welcome { f3_name: String },

    /// Feedback-form relay to the operations inbox
    Feedback { f3_name: String, description: String },
}

impl EmailTemplate {
    /// Subject line for this template
    pub fn subject(&self) -> &'static str {
        match self {
            EmailTemplate::VerificationCode { .. } => "Your CarePortal verification code",
            EmailTemplate::Welcome { .. } => "Welcome to CarePortal",
            EmailTemplate::Feedback { .. } => "New CarePortal feedback",
        }
    }

    /// Render the template to its final HTML string
    pub fn render(&self) -> String {
        match self {
            EmailTemplate::VerificationCode {
                code,
                expires_minutes,
                magic_link,
            } => format!(
                concat!(
                    "<div style=\"font-family: sans-serif; max-width: 480px;\">",
                    "<h2>Verify your email</h2>",
                    "<p>Enter this code to finish signing in:</p>",
                    "<p style=\"font-size: 28px; letter-spacing: 4px;\"><strong>{code}</strong></p>",
                    "<p>This code expires in {minutes} minutes.</p>",
                    "<p>Or use this link: <a href=\"{link}\">{link}</a></p>",
                    "</div>"
                ),
                code = escape_html(code),
                minutes = expires_minutes,
                link = escape_html(magic_link),
            ),

            EmailTemplate::Welcome { f3_name } => format!(
                concat!(
                    "<div style=\"font-family: sans-serif; max-width: 480px;\">",
                    "<h2>Welcome, {name}!</h2>",
                    "<p>Your CarePortal account is ready. You can now sign up for ",
                    "hospital visits and events from your region's page.</p>",
                    "</div>"
                ),
                name = escape_html(f3_name),
            ),

            EmailTemplate::Feedback { f3_name, description } => format!(
                concat!(
                    "<div style=\"font-family: sans-serif; max-width: 480px;\">",
                    "<h2>Feedback from {name}</h2>",
                    "<p>{description}</p>",
                    "</div>"
                ),
                name = escape_html(f3_name),
                description = escape_html(description),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verification_template_includes_code_expiry_and_link() {
        let html = EmailTemplate::VerificationCode {
            code: "123456".to_string(),
            expires_minutes: 10,
            magic_link: "http://localhost:8080/verify-email?callbackUrl=/".to_string(),
        }
        .render();

        assert!(html.contains("123456"));
        assert!(html.contains("10 minutes"));
        assert!(html.contains("verify-email?callbackUrl=/"));
    }

    #[test]
    fn feedback_template_escapes_markup() {
        let html = EmailTemplate::Feedback {
            f3_name: "Chaser".to_string(),
            description: "<script>alert('x')</script>".to_string(),
        }
        .render();

        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&#39;x&#39;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn welcome_template_escapes_name() {
        let html = EmailTemplate::Welcome {
            f3_name: "A \"B\" & C".to_string(),
        }
        .render();

        assert!(html.contains("A &quot;B&quot; &amp; C"));
    }

    #[test]
    fn escape_html_covers_all_significant_characters() {
        assert_eq!(escape_html(r#"&<>"'"#), "&amp;&lt;&gt;&quot;&#39;");
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn subjects_are_stable() {
        let template = EmailTemplate::VerificationCode {
            code: "123456".to_string(),
            expires_minutes: 10,
            magic_link: String::new(),
        };
        assert_eq!(template.subject(), "Your CarePortal verification code");
    }
}
