//! Benchmarks for the artist aggregations
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lofi_stats::catalog::{
    AlbumType, Artist, ArtistTrack, ArtistTrackAlbum, ArtistTrackArtist, BasicLabel,
};
use lofi_stats::format::to_kmb;
use lofi_stats::stats::*;

const LABELS: [&str; 5] = ["Chillhop Music", "Lofi Girl", "College Music", "Nettwerk", "Lo Fi Records"];

/// A prolific artist: every recording released twice, rotating labels and features
fn create_test_artist(recordings: usize) -> Artist {
    let subject = ArtistTrackArtist::new("subject", "Subject");
    let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();

    let tracks: Vec<ArtistTrack> = (0..recordings * 2)
        .map(|i| {
            let recording = i % recordings;
            let album = i / 3;
            let feature = ArtistTrackArtist::new(format!("feat{}", recording % 40), format!("Feature {}", recording % 40));
            let artists = vec![subject.clone(), feature];

            ArtistTrack {
                album: ArtistTrackAlbum {
                    artists: artists.clone(),
                    id: format!("album{}", album),
                    image_url_s: None,
                    label: BasicLabel::new(LABELS[album % LABELS.len()], "https://img/label"),
                    name: format!("Album {}", album),
                    release_date: start + chrono::Duration::days(album as i64 * 7),
                    album_type: if album % 4 == 0 { AlbumType::Album } else { AlbumType::Single },
                },
                artists,
                id: format!("track{}", i),
                isrc: format!("ISRC{:06}", recording),
                name: format!("Track {}", recording),
            }
        })
        .collect();

    Artist {
        name: "Subject".to_string(),
        id: "subject".to_string(),
        image_url_l: None,
        tracks,
    }
}

fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregations");

    for size in [100, 1000, 10000] {
        let artist = create_test_artist(size);
        let tracks = artist.tracks.as_slice();

        group.throughput(Throughput::Elements(tracks.len() as u64));

        group.bench_function(format!("dedup_{}", size), |b| {
            b.iter(|| dedup_by_isrc(black_box(tracks)))
        });

        group.bench_function(format!("top_labels_{}", size), |b| {
            b.iter(|| top_labels(black_box(tracks)))
        });

        group.bench_function(format!("top_collaborators_{}", size), |b| {
            b.iter(|| top_collaborators(black_box(tracks), "subject"))
        });

        group.bench_function(format!("discography_{}", size), |b| {
            b.iter(|| discography(black_box(tracks)))
        });
    }

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    for size in [100, 1000] {
        let artist = create_test_artist(size);

        group.throughput(Throughput::Elements(artist.tracks.len() as u64));

        group.bench_function(format!("build_{}", size), |b| {
            b.iter(|| ArtistSummary::build(black_box(&artist), today))
        });
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let values: Vec<u64> = (0..1000u64).map(|i| i * i * 7_919).collect();

    c.bench_function("to_kmb_1000", |b| {
        b.iter(|| {
            for v in &values {
                black_box(to_kmb(black_box(*v)));
            }
        })
    });
}

criterion_group!(benches, bench_aggregations, bench_summary, bench_format);
criterion_main!(benches);
