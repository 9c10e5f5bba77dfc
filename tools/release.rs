use chrono::Local;
use std::fs;
use std::io::{self, Write};
use std::process::Command;
use toml_edit::{DocumentMut, Item};

type ReleaseResult<T> = Result<T, Box<dyn std::error::Error>>;

fn git_output(args: &[&str]) -> ReleaseResult<String> {
    let output = Command::new("git").args(args).output()?;
    if !output.status.success() {
        return Err(format!("git {:?} failed", args).into());
    }
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

fn latest_tag() -> Option<String> {
    git_output(&["describe", "--tags", "--abbrev=0"]).ok()
}

fn commits_since(tag: Option<&str>) -> ReleaseResult<String> {
    let range;
    let mut args = vec!["log", "--pretty=format:- %s"];
    if let Some(tag) = tag {
        range = format!("{}..HEAD", tag);
        args.push(&range);
    }
    git_output(&args)
}

fn confirm(message: &str) -> ReleaseResult<bool> {
    print!("{} (y/n): ", message);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_lowercase() == "y")
}

fn prompt(message: &str) -> ReleaseResult<String> {
    println!("{}", message);
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn bump_manifest(new_version: &str) -> ReleaseResult<()> {
    let cargo_content = fs::read_to_string("Cargo.toml")?;
    let mut doc = cargo_content.parse::<DocumentMut>()?;
    doc["package"]["version"] = Item::from(new_version);
    fs::write("Cargo.toml", doc.to_string())?;
    println!("Updated Cargo.toml to {}", new_version);
    Ok(())
}

fn update_changelog(new_version: &str, notes: &str) -> ReleaseResult<()> {
    let date = Local::now().format("%Y-%m-%d");
    let section = format!("## {} - {}\n\n{}\n\n", new_version, date, notes);

    let existing = fs::read_to_string("CHANGELOG.md").unwrap_or_default();
    let updated = match existing.find("## ") {
        Some(pos) => {
            let (head, tail) = existing.split_at(pos);
            format!("{}{}{}", head, section, tail)
        }
        None if existing.is_empty() => format!("# Changelog\n\n{}", section),
        None => format!("{}\n{}", existing.trim_end(), section),
    };

    fs::write("CHANGELOG.md", updated)?;
    println!("Updated CHANGELOG.md");
    Ok(())
}

fn run_shell(cmd: &str, error_msg: &str) -> ReleaseResult<()> {
    println!("Executing: {}", cmd);
    let status = Command::new("sh").arg("-c").arg(cmd).status()?;
    if !status.success() {
        return Err(error_msg.to_string().into());
    }
    Ok(())
}

fn main() -> ReleaseResult<()> {
    let cargo_content = fs::read_to_string("Cargo.toml")?;
    let doc = cargo_content.parse::<DocumentMut>()?;
    let current_version = doc["package"]["version"]
        .as_str()
        .ok_or("Could not find version in Cargo.toml")?;

    println!("Current version is: {}", current_version);
    let new_version = prompt("Enter new version:")?;
    if new_version.is_empty() {
        return Err("Version cannot be empty".into());
    }

    let previous_tag = latest_tag();
    println!(
        "Previous tag: {}",
        previous_tag.as_deref().unwrap_or("None")
    );

    let notes = commits_since(previous_tag.as_deref())?;
    if notes.is_empty() {
        println!("Warning: no commits found since the previous tag.");
        if !confirm("Continue with empty release notes?")? {
            println!("Release aborted.");
            return Ok(());
        }
    } else {
        println!("Release notes:\n{}", notes);
    }

    if !confirm(&format!("Ready to release version {}?", new_version))? {
        println!("Release aborted.");
        return Ok(());
    }

    bump_manifest(&new_version)?;
    update_changelog(&new_version, &notes)?;

    // Refresh Cargo.lock so the bumped version lands in the commit
    println!("Updating Cargo.lock...");
    let status = Command::new("cargo").arg("check").status()?;
    if !status.success() {
        return Err("Failed to update Cargo.lock".into());
    }

    run_shell(
        "git add Cargo.toml Cargo.lock CHANGELOG.md",
        "Failed to stage release files",
    )?;
    run_shell(
        &format!("git commit -m \"Bump version to {}\"", new_version),
        "Failed to commit version bump",
    )?;
    run_shell(
        &format!(
            "git tag -a v{} -m \"Version {}\"",
            new_version, new_version
        ),
        "Failed to create tag",
    )?;
    run_shell("git push", "Failed to push commits")?;
    run_shell("git push --tags", "Failed to push tags")?;

    if confirm("Publish to crates.io?")? {
        println!("Publishing to crates.io...");
        let status = Command::new("cargo").arg("publish").status()?;
        if !status.success() {
            return Err("Failed to publish to crates.io".into());
        }
    } else {
        println!("Skipping crates.io publishing.");
    }

    if confirm("Create GitHub release?")? {
        println!("Creating GitHub release...");
        let status = Command::new("gh")
            .args([
                "release",
                "create",
                &format!("v{}", new_version),
                "--title",
                &format!("v{}", new_version),
                "--notes",
                &notes,
            ])
            .status()?;
        if !status.success() {
            return Err("Failed to create GitHub release".into());
        }
    } else {
        println!("Skipping GitHub release creation.");
    }

    println!("Successfully released version {}", new_version);
    Ok(())
}
