// ============================================================================
// QUERY - Typed pagination / sort / filter builder
// ============================================================================
//
// Wire format:
//   page=0&size=10&sort=departureTime,asc&filter=status=='OPEN';origin=='*HAN*'
//
// Clauses are joined with ';' (conjunction). String values are single-quoted
// with `\` and `'` escaped; `*` is the server's wildcard and passes through.

use std::fmt::Write as _;

use chrono::{DateTime, NaiveDate, Utc};

/// A field a resource exposes for filtering and sorting
pub trait FilterField: Copy {
    fn name(&self) -> &'static str;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Ge,
    Lt,
    Le,
    In,
}

impl Operator {
    fn token(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => "=gt=",
            Self::Ge => "=ge=",
            Self::Lt => "=lt=",
            Self::Le => "=le=",
            Self::In => "=in=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Text(String),
    /// Text with `*` wildcards added around it
    Pattern { prefix: bool, text: String, suffix: bool },
    Integer(i64),
    Decimal(f64),
    Bool(bool),
}

impl FilterValue {
    fn write_to(&self, out: &mut String) {
        match self {
            Self::Text(text) => {
                out.push('\'');
                push_escaped(out, text);
                out.push('\'');
            }
            Self::Pattern { prefix, text, suffix } => {
                out.push('\'');
                if *prefix {
                    out.push('*');
                }
                push_escaped(out, text);
                if *suffix {
                    out.push('*');
                }
                out.push('\'');
            }
            Self::Integer(value) => {
                let _ = write!(out, "{}", value);
            }
            Self::Decimal(value) => {
                let _ = write!(out, "{}", value);
            }
            Self::Bool(value) => {
                let _ = write!(out, "{}", value);
            }
        }
    }
}

fn push_escaped(out: &mut String, text: &str) {
    for c in text.chars() {
        if matches!(c, '\\' | '\'') {
            out.push('\\');
        }
        out.push(c);
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for FilterValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FilterValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(value: NaiveDate) -> Self {
        Self::Text(value.format("%Y-%m-%d").to_string())
    }
}

impl From<DateTime<Utc>> for FilterValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Text(value.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clause<F: FilterField> {
    pub field: F,
    pub operator: Operator,
    pub values: Vec<FilterValue>,
}

impl<F: FilterField> Clause<F> {
    fn write_to(&self, out: &mut String) {
        out.push_str(self.field.name());
        out.push_str(self.operator.token());
        if self.operator == Operator::In {
            out.push('(');
            for (i, value) in self.values.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                value.write_to(out);
            }
            out.push(')');
        } else if let Some(value) = self.values.first() {
            value.write_to(out);
        }
    }
}

/// Listing parameters for one resource
#[derive(Debug, Clone, PartialEq)]
pub struct Query<F: FilterField> {
    page: u32,
    size: u32,
    sort: Option<(F, SortDirection)>,
    clauses: Vec<Clause<F>>,
}

impl<F: FilterField> Default for Query<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FilterField> Query<F> {
    /// First page with the configured default size
    pub fn new() -> Self {
        Self {
            page: 0,
            size: crate::config::CONFIG.default_page_size,
            sort: None,
            clauses: Vec::new(),
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = size.max(1);
        self
    }

    pub fn sort_by(mut self, field: F, direction: SortDirection) -> Self {
        self.sort = Some((field, direction));
        self
    }

    pub fn current_page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.size
    }

    fn push(mut self, field: F, operator: Operator, values: Vec<FilterValue>) -> Self {
        self.clauses.push(Clause {
            field,
            operator,
            values,
        });
        self
    }

    pub fn eq(self, field: F, value: impl Into<FilterValue>) -> Self {
        self.push(field, Operator::Eq, vec![value.into()])
    }

    pub fn ne(self, field: F, value: impl Into<FilterValue>) -> Self {
        self.push(field, Operator::Ne, vec![value.into()])
    }

    pub fn gt(self, field: F, value: impl Into<FilterValue>) -> Self {
        self.push(field, Operator::Gt, vec![value.into()])
    }

    pub fn ge(self, field: F, value: impl Into<FilterValue>) -> Self {
        self.push(field, Operator::Ge, vec![value.into()])
    }

    pub fn lt(self, field: F, value: impl Into<FilterValue>) -> Self {
        self.push(field, Operator::Lt, vec![value.into()])
    }

    pub fn le(self, field: F, value: impl Into<FilterValue>) -> Self {
        self.push(field, Operator::Le, vec![value.into()])
    }

    pub fn one_of<V, I>(self, field: F, values: I) -> Self
    where
        V: Into<FilterValue>,
        I: IntoIterator<Item = V>,
    {
        let values: Vec<FilterValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            return self;
        }
        self.push(field, Operator::In, values)
    }

    /// `field=='*text*'`
    pub fn contains(self, field: F, text: &str) -> Self {
        self.push(
            field,
            Operator::Eq,
            vec![FilterValue::Pattern {
                prefix: true,
                text: text.to_string(),
                suffix: true,
            }],
        )
    }

    /// `field=='text*'`
    pub fn starts_with(self, field: F, text: &str) -> Self {
        self.push(
            field,
            Operator::Eq,
            vec![FilterValue::Pattern {
                prefix: false,
                text: text.to_string(),
                suffix: true,
            }],
        )
    }

    /// Equality on a form field; blank input adds nothing
    pub fn eq_if(self, field: F, value: Option<impl Into<FilterValue>>) -> Self {
        match value {
            Some(value) => self.eq(field, value),
            None => self,
        }
    }

    /// Wildcard match on a text input; blank input adds nothing
    pub fn contains_if(self, field: F, text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            self
        } else {
            self.contains(field, text)
        }
    }

    pub fn has_filters(&self) -> bool {
        !self.clauses.is_empty()
    }

    /// `a=='x';b=gt=3`, or None without clauses
    pub fn filter_expression(&self) -> Option<String> {
        if self.clauses.is_empty() {
            return None;
        }
        let mut out = String::new();
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                out.push(';');
            }
            clause.write_to(&mut out);
        }
        Some(out)
    }

    /// Decoded key/value pairs, in wire order
    pub fn to_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = vec![
            ("page".to_string(), self.page.to_string()),
            ("size".to_string(), self.size.to_string()),
        ];
        if let Some((field, direction)) = &self.sort {
            pairs.push((
                "sort".to_string(),
                format!("{},{}", field.name(), direction.as_str()),
            ));
        }
        if let Some(filter) = self.filter_expression() {
            pairs.push(("filter".to_string(), filter));
        }
        pairs
    }
}

/// Percent-encodes pairs into `a=1&b=2`
pub fn encode_pairs(pairs: &[(String, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key, value);
    }
    serializer.finish()
}
