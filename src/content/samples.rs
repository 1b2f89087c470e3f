//! Code samples shown under API pages, one snippet per client language.
//!
//! `CodeSamples` holds a field per `Language` variant, so a page can never be
//! missing the snippet for the selected language. String keys (config, env)
//! go through `Language::from_str`, which rejects anything outside the set.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    JavaScript,
    Python,
    Php,
    Curl,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::JavaScript,
        Language::Python,
        Language::Php,
        Language::Curl,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Php => "php",
            Language::Curl => "curl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Python => "Python",
            Language::Php => "PHP",
            Language::Curl => "cURL",
        }
    }

    /// Token passed to syntect when highlighting the snippet.
    pub fn syntax_token(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::Python => "python",
            Language::Php => "php",
            Language::Curl => "bash",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Language::JavaScript => Language::Python,
            Language::Python => Language::Php,
            Language::Php => Language::Curl,
            Language::Curl => Language::JavaScript,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    Unknown(String),
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageError::Unknown(key) => write!(f, "unknown sample language: {key}"),
        }
    }
}

impl std::error::Error for LanguageError {}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Language::ALL
            .into_iter()
            .find(|lang| lang.key() == key)
            .ok_or_else(|| LanguageError::Unknown(s.to_string()))
    }
}

#[derive(Debug)]
pub struct CodeSamples {
    pub javascript: &'static str,
    pub python: &'static str,
    pub php: &'static str,
    pub curl: &'static str,
}

impl CodeSamples {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::JavaScript => self.javascript,
            Language::Python => self.python,
            Language::Php => self.php,
            Language::Curl => self.curl,
        }
    }

    /// Render as a fenced markdown block for the markdown renderer.
    pub fn to_markdown(&self, language: Language) -> String {
        format!("```{}\n{}\n```", language.syntax_token(), self.get(language))
    }
}

pub static SMS_SEND: CodeSamples = CodeSamples {
    javascript: r#"const AfricasTalking = require('africastalking');

const client = AfricasTalking({
  apiKey: 'YOUR_API_KEY',
  username: 'YOUR_USERNAME'
});

const sms = client.SMS;

// Send SMS
const options = {
  to: ['+254711XXXYYY'],
  message: 'Hello, this is a test message from AfricasTalking!'
};

sms.send(options)
  .then(response => {
    console.log(response);
  })
  .catch(error => {
    console.error(error);
  });"#,
    python: r#"import africastalking

# Initialize SDK
username = "YOUR_USERNAME"
api_key = "YOUR_API_KEY"
africastalking.initialize(username, api_key)

# Initialize a service
sms = africastalking.SMS

# Send SMS
response = sms.send(
    "Hello, this is a test message from AfricasTalking!",
    ["+254711XXXYYY"]
)

print(response)"#,
    php: r#"<?php
require_once 'vendor/autoload.php';

use AfricasTalking\SDK\AfricasTalking;

$username = 'YOUR_USERNAME';
$apiKey   = 'YOUR_API_KEY';

$AT = new AfricasTalking($username, $apiKey);

$sms = $AT->sms();

$result = $sms->send([
    'to'      => '+254711XXXYYY',
    'message' => 'Hello, this is a test message from AfricasTalking!'
]);

print_r($result);
?>"#,
    curl: r#"curl -X POST https://api.africastalking.com/version1/messaging \
  -H "apiKey: YOUR_API_KEY" \
  -H "Content-Type: application/x-www-form-urlencoded" \
  -d "username=YOUR_USERNAME" \
  -d "to=+254711XXXYYY" \
  -d "message=Hello, this is a test message from AfricasTalking!""#,
};
