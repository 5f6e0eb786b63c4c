//! Stylesheet consuming the theme variables written by the theme bridge.
//!
//! Every color goes through `var(--<semanticColor>, <fallback>)`, so the
//! block looks reasonable before any theme has been applied.

pub const STYLESHEET: &str = r#".sectionBackground .container {
  max-width: 700px;
  margin: 0px auto;
  box-shadow: 0 2px 4px 0 rgba(0, 0, 0, 0.2), 0 25px 50px 0 rgba(0, 0, 0, 0.1);
}
.sectionBackground .row {
  padding: 20px;
  background-color: var(--bodyBackground, #ffffff);
  border-bottom: 1px solid var(--bodyDivider, #edebe9);
}
.sectionBackground .column {
  display: block;
}
.sectionBackground .title {
  font-size: 21px;
  font-weight: 100;
  color: var(--bodyText, #323130);
}
.sectionBackground .subTitle {
  font-size: 17px;
  font-weight: 300;
  color: var(--bodySubtext, #605e5c);
}
.sectionBackground .description {
  font-size: 17px;
  font-weight: 300;
  color: var(--link, #0078d4);
}
"#;
