use crate::config::ProjectInfo;
use crate::model::{Contribution, OutputFormat};
use std::io::{self, Write};

pub fn render<W: Write>(
    out: &mut W,
    format: OutputFormat,
    project: &ProjectInfo,
    contributions: &[Contribution],
) -> io::Result<()> {
    match format {
        OutputFormat::Plain => render_plain(out, project, contributions),
        OutputFormat::Markdown => render_markdown(out, project, contributions),
    }
}

pub fn render_plain<W: Write>(
    out: &mut W,
    project: &ProjectInfo,
    contributions: &[Contribution],
) -> io::Result<()> {
    writeln!(
        out,
        "# This is the official list of {} authors for copyright purposes.",
        project.name
    )?;
    writeln!(out)?;
    writeln!(out, "# This file is automatically generated by")?;
    writeln!(
        out,
        "# {}.  Items are automatically added by",
        project.generator
    )?;
    writeln!(out, "# git shortlog -sne.  Please add rules to .mailmap to keep it")?;
    writeln!(
        out,
        "# canonical (see \"MAPPING AUTHORS\" section of git help shortlog for"
    )?;
    writeln!(out, "# the notation of the rules).")?;
    writeln!(out)?;
    writeln!(out, "# Individual Persons")?;
    writeln!(out)?;

    for c in contributions {
        writeln!(out, "{} <{}>", c.name, c.email)?;
    }

    writeln!(out)?;
    writeln!(out, "## Organizations")?;
    writeln!(out)?;
    writeln!(out, "{}", project.organization)?;
    Ok(())
}

pub fn render_markdown<W: Write>(
    out: &mut W,
    project: &ProjectInfo,
    contributions: &[Contribution],
) -> io::Result<()> {
    writeln!(
        out,
        "<!-- DO NOT MODIFY : this file is automatically generated by {} -->",
        project.generator
    )?;
    writeln!(out)?;
    writeln!(out, "# Authors")?;
    writeln!(out)?;
    writeln!(
        out,
        "This is the official list of {} authors for copyright purposes.",
        project.name
    )?;
    writeln!(out)?;
    writeln!(out, "## Individual Persons")?;
    writeln!(out)?;
    writeln!(out, "|Name |E-mail  |GitHub|Commits |")?;
    writeln!(out, "|:----|:-------|:-----|-------:|")?;

    for c in contributions {
        let github = match c.login.as_deref() {
            Some(login) if !login.is_empty() => {
                format!("[@{login}](https://github.com/{login})")
            }
            _ => String::new(),
        };
        writeln!(out, "|{}|<{}>|{}|{}|", c.name, c.email, github, c.commits)?;
    }

    writeln!(out)?;
    writeln!(
        out,
        "Items are automatically added by `git shortlog -sne`.  \
         Please add rules to [`.mailmap`](.mailmap) to keep it canonical \
         (see \"MAPPING AUTHORS\" section of `git help shortlog` for the notation of the rules).  \
         E-mail field must match your public E-mail setting on your GitHub account \
         if you wish to show your GitHub account name."
    )?;
    writeln!(out)?;
    writeln!(out, "## Organizations")?;
    writeln!(out)?;
    writeln!(
        out,
        "- [{}]({})",
        project.organization, project.organization_url
    )?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample() -> Vec<Contribution> {
        let mut tarao = Contribution::new("INA Lintaro", "tarao.gnn@gmail.com", 600);
        tarao.login = Some("tarao".to_string());
        vec![tarao, Contribution::new("Jane Doe", "jane@example.com", 3)]
    }

    fn to_string(format: OutputFormat, items: &[Contribution]) -> String {
        let mut buf = Vec::new();
        render(&mut buf, format, &ProjectInfo::default(), items).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_output() {
        let expected = "\
# This is the official list of Fireworq authors for copyright purposes.

# This file is automatically generated by
# script/genauthors/genauthors.go.  Items are automatically added by
# git shortlog -sne.  Please add rules to .mailmap to keep it
# canonical (see \"MAPPING AUTHORS\" section of git help shortlog for
# the notation of the rules).

# Individual Persons

INA Lintaro <tarao.gnn@gmail.com>
Jane Doe <jane@example.com>

## Organizations

Hatena Co., Ltd.
";
        assert_eq!(to_string(OutputFormat::Plain, &sample()), expected);
    }

    #[test]
    fn markdown_output() {
        let expected = "\
<!-- DO NOT MODIFY : this file is automatically generated by script/genauthors/genauthors.go -->

# Authors

This is the official list of Fireworq authors for copyright purposes.

## Individual Persons

|Name |E-mail  |GitHub|Commits |
|:----|:-------|:-----|-------:|
|INA Lintaro|<tarao.gnn@gmail.com>|[@tarao](https://github.com/tarao)|600|
|Jane Doe|<jane@example.com>||3|

Items are automatically added by `git shortlog -sne`.  Please add rules to [`.mailmap`](.mailmap) to keep it canonical (see \"MAPPING AUTHORS\" section of `git help shortlog` for the notation of the rules).  E-mail field must match your public E-mail setting on your GitHub account if you wish to show your GitHub account name.

## Organizations

- [Hatena Co., Ltd.](http://hatenacorp.jp/)

";
        assert_eq!(to_string(OutputFormat::Markdown, &sample()), expected);
    }

    #[test]
    fn plain_output_ignores_login() {
        let text = to_string(OutputFormat::Plain, &sample());
        assert!(!text.contains("tarao]("));
        assert!(!text.contains("|"));
    }

    #[test]
    fn empty_list_keeps_framing() {
        let text = to_string(OutputFormat::Plain, &[]);
        assert!(text.contains("# Individual Persons\n\n\n## Organizations\n"));
    }
}
