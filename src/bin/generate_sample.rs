use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const PLATFORMS: [&str; 4] = ["Facebook", "Instagram", "LinkedIn", "Twitter"];
const POST_TYPES: [&str; 3] = ["Image", "Link", "Video"];
const AGE_GROUPS: [&str; 5] = ["18-24", "25-34", "35-44", "45-54", "55-64"];

/// One synthetic post.
struct Post {
    platform: &'static str,
    post_type: &'static str,
    age_group: &'static str,
    day: u32,
    hour: u32,
    minute: u32,
    likes: u32,
}

fn generate_posts(rng: &mut StdRng, count: usize) -> Vec<Post> {
    (0..count)
        .map(|_| {
            let platform_idx = rng.random_range(0..PLATFORMS.len());
            let type_idx = rng.random_range(0..POST_TYPES.len());
            let age_idx = rng.random_range(0..AGE_GROUPS.len());

            // Videos and younger audiences draw more likes.
            let base = 150 + 120 * type_idx as u32 + 60 * (AGE_GROUPS.len() - age_idx) as u32;
            let likes = rng.random_range(0..base) + rng.random_range(0..200);

            Post {
                platform: PLATFORMS[platform_idx],
                post_type: POST_TYPES[type_idx],
                age_group: AGE_GROUPS[age_idx],
                day: rng.random_range(1..=7),
                hour: rng.random_range(0..24),
                minute: rng.random_range(0..60),
                likes,
            }
        })
        .collect()
}

fn write_csv(path: &Path, header: &[&str], rows: impl Iterator<Item = Vec<String>>) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(header)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = StdRng::seed_from_u64(42);
    let posts = generate_posts(&mut rng, 500);

    write_csv(
        &out_dir.join("data.csv"),
        &["AgeGroup", "Likes"],
        posts
            .iter()
            .map(|p| vec![p.age_group.to_string(), p.likes.to_string()]),
    )?;

    write_csv(
        &out_dir.join("datacopy1.csv"),
        &["Platform", "PostType", "Likes"],
        posts.iter().map(|p| {
            vec![
                p.platform.to_string(),
                p.post_type.to_string(),
                p.likes.to_string(),
            ]
        }),
    )?;

    write_csv(
        &out_dir.join("datacopy2.csv"),
        &["Date", "Likes"],
        posts.iter().map(|p| {
            vec![
                format!("3/{}/2024 {}:{:02}", p.day, p.hour, p.minute),
                p.likes.to_string(),
            ]
        }),
    )?;

    println!(
        "Wrote {} posts to data.csv, datacopy1.csv and datacopy2.csv in {}",
        posts.len(),
        out_dir.display()
    );
    Ok(())
}
