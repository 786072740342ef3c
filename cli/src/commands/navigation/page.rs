//! # Navigation Map Page
//!
//! File: cli/src/commands/navigation/page.rs
//!
//! ## Overview
//!
//! The single HTML page served at `/`: the island map with one clickable
//! icon per ride. Clicking an icon fetches `/directions?to=<key>` in the
//! browser and renders the steps as an ordered list. The server only
//! renders the markup, once at startup; it makes no decisions.
//!
//! The page is a Tera template fed with `MAP_IMAGE_URL` and `MAP_ICONS`.
//!
use crate::core::error::{IsleError, Result};
use anyhow::Context as _;
use serde::Serialize;
use tera::{Context, Tera};

/// One clickable ride icon on the map.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapIcon {
    /// Destination key passed to `/directions`.
    pub destination: &'static str,
    pub image_url: &'static str,
    pub title: &'static str,
    /// CSS offset from the top of the map, in pixels.
    pub top: u16,
    /// CSS offset from the left of the map, in pixels.
    pub left: u16,
}

/// Background image of the island.
pub const MAP_IMAGE_URL: &str = "https://i.postimg.cc/7hTkGYNG/map.png";

/// Ride icons, one per destination in the directions table.
pub const MAP_ICONS: &[MapIcon] = &[
    MapIcon {
        destination: "volcano",
        image_url: "https://i.postimg.cc/HswLBBQJ/icon-volcano.png",
        title: "🔥 Ashen Secrets 🔥",
        top: 70,
        left: 120,
    },
    MapIcon {
        destination: "maze",
        image_url: "https://i.postimg.cc/nr8H1DrY/icon-maze.png",
        title: "🌿 Maze of Whisper 🌿",
        top: 220,
        left: 60,
    },
    MapIcon {
        destination: "boat",
        image_url: "https://i.postimg.cc/J7B0B105/icon-boat.png",
        title: "🚤 The Forgotten Current 🚤",
        top: 400,
        left: 220,
    },
    MapIcon {
        destination: "resort",
        image_url: "https://i.postimg.cc/QdNjSs8P/icon-resort.png",
        title: "🌺 Secrets of the Sands 🌺",
        top: 100,
        left: 320,
    },
];

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Mystery Island Navigation</title>
    <style>
        .map-container {
            position: relative;
            display: inline-block;
        }
        .icon {
            position: absolute;
            width: 40px;
            cursor: pointer;
            transition: transform 0.2s ease;
        }
        .icon:hover {
            transform: scale(1.3);
            z-index: 2;
        }
        #directions {
            margin-top: 20px;
            font-family: sans-serif;
            padding: 10px;
            border: 1px solid #aaa;
            width: 60%;
            background: #f7f7f7;
        }
    </style>
    <script>
        async function getDirections(destination) {
            const res = await fetch(`/directions?to=${encodeURIComponent(destination)}`);
            const data = await res.json();
            let html = `<h3>Route to ${data.destination}</h3><ol>`;
            data.route.forEach(step => {
                html += `<li>${step}</li>`;
            });
            html += `</ol>`;
            document.getElementById("directions").innerHTML = html;
        }
    </script>
</head>
<body style="text-align:center;">
    <h1>🗺️ Welcome to Mystery Island</h1>
    <div class="map-container">
        <img src="{{ map_image_url }}" alt="Mystery Island Map" style="width:90%;">
{%- for icon in icons %}
        <img src="{{ icon.image_url }}" class="icon" title="{{ icon.title }}" style="top:{{ icon.top }}px; left:{{ icon.left }}px;" onclick="getDirections('{{ icon.destination }}')">
{%- endfor %}
    </div>
    <div id="directions"></div>
</body>
</html>
"#;

/// Renders the full navigation page.
///
/// ## Errors
///
/// Fails only if the page template itself is broken.
pub fn render_page() -> Result<String> {
    let mut context = Context::new();
    context.insert("map_image_url", MAP_IMAGE_URL);
    context.insert("icons", MAP_ICONS);

    Tera::one_off(PAGE_TEMPLATE, &context, false)
        .map_err(|source| IsleError::Template { source })
        .context("Failed to render the navigation page")
}
