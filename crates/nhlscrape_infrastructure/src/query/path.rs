use nhlscrape_interface::errors::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// `.name`
    Child(String),
    /// `..name`
    Descendant(String),
    /// `[n]`
    Index(usize),
    /// `[*]`
    Wildcard,
    /// `.(a,b)`
    Project(Vec<String>),
    /// `..(a,b)`
    DescendantProject(Vec<String>),
}

pub fn parse(expression: &str) -> Result<Vec<Step>> {
    let mut parser = Parser {
        expression,
        chars: expression.trim().char_indices().peekable(),
    };
    parser.parse()
}

struct Parser<'a> {
    expression: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
}

impl Parser<'_> {
    fn parse(&mut self) -> Result<Vec<Step>> {
        match self.chars.next() {
            Some((_, '$')) => {}
            _ => return Err(self.error("expression must start with '$'")),
        }

        let mut steps = Vec::new();
        while let Some((position, c)) = self.chars.next() {
            let step = match c {
                '.' => {
                    let recursive = self.chars.next_if(|(_, c)| *c == '.').is_some();
                    if self.chars.next_if(|(_, c)| *c == '(').is_some() {
                        let fields = self.fields()?;
                        if recursive {
                            Step::DescendantProject(fields)
                        } else {
                            Step::Project(fields)
                        }
                    } else {
                        let name = self.name();
                        if name.is_empty() {
                            return Err(self.error(&format!("missing field name at {position}")));
                        }
                        if recursive {
                            Step::Descendant(name)
                        } else {
                            Step::Child(name)
                        }
                    }
                }
                '[' => self.index()?,
                other => {
                    return Err(self.error(&format!("unexpected '{other}' at {position}")));
                }
            };
            steps.push(step);
        }

        Ok(steps)
    }

    fn name(&mut self) -> String {
        let mut name = String::new();
        while let Some((_, c)) = self.chars.next_if(|(_, c)| !matches!(c, '.' | '[' | '(' | ')' | ',')) {
            name.push(c);
        }
        name
    }

    // Called after the opening '('.
    fn fields(&mut self) -> Result<Vec<String>> {
        let mut body = String::new();
        loop {
            match self.chars.next() {
                Some((_, ')')) => break,
                Some((_, c)) => body.push(c),
                None => return Err(self.error("unclosed '(' in projection")),
            }
        }

        let fields = body
            .split(',')
            .map(|field| field.trim().to_string())
            .collect::<Vec<_>>();
        if fields.iter().any(String::is_empty) {
            return Err(self.error("empty field name in projection"));
        }

        Ok(fields)
    }

    // Called after the opening '['.
    fn index(&mut self) -> Result<Step> {
        let mut body = String::new();
        loop {
            match self.chars.next() {
                Some((_, ']')) => break,
                Some((_, c)) => body.push(c),
                None => return Err(self.error("unclosed '['")),
            }
        }

        match body.trim() {
            "*" => Ok(Step::Wildcard),
            index => index
                .parse::<usize>()
                .map(Step::Index)
                .map_err(|_| self.error(&format!("invalid array index '{index}'"))),
        }
    }

    fn error(&self, reason: &str) -> AppError {
        AppError::QueryError {
            msg: format!("{reason} in '{}'", self.expression),
        }
    }
}
