//! Embedded web page: Leaflet map plus the question box.

pub const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Outlet Locator</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <link rel="stylesheet" href="/style.css">
</head>
<body>
    <div id="map"></div>
    <aside id="chat">
        <input id="search-box" type="text" placeholder="Which outlets close the latest?">
        <button id="search-button">Ask</button>
        <div id="search-results"></div>
    </aside>
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <script src="/app.js"></script>
</body>
</html>
"#;

pub const STYLE_CSS: &str = r#"
html, body { margin: 0; height: 100%; font-family: system-ui, sans-serif; }
#map { position: absolute; inset: 0 360px 0 0; }
#chat { position: absolute; top: 0; right: 0; bottom: 0; width: 340px; padding: 10px; background: #f7f7f7; overflow-y: auto; }
#search-box { width: 70%; padding: 6px; }
#search-button { padding: 6px 10px; background: #00704A; color: #fff; border: 0; cursor: pointer; }
#search-results { margin-top: 12px; white-space: pre-line; }
"#;

pub const APP_JS: &str = r#"
const map = L.map('map');
L.tileLayer('https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}.png', {
    attribution: '&copy; OpenStreetMap contributors, &copy; CartoDB'
}).addTo(map);
map.scrollWheelZoom.disable();

fetch('/api/map')
    .then(r => r.ok ? r.json() : r.json().then(b => Promise.reject(new Error(b.error))))
    .then(view => {
        map.setView([view.center.lat, view.center.lon], view.zoom);
        view.markers.forEach(m => {
            L.marker([m.position.lat, m.position.lon]).addTo(map).bindPopup(
                `<h3>${m.name}</h3><p>${m.address}</p>` +
                `<p>Operating Hours: ${m.operating_hours}</p>` +
                `<a href="${m.waze_link}" target="_blank">Open in Waze</a>`);
        });
        view.proximity.forEach(p => {
            L.circleMarker([p.near.lat, p.near.lon], {
                radius: 6, fillColor: 'red', color: 'darkred', weight: 1, fillOpacity: 0.8
            }).addTo(map);
        });
        if (view.max_bounds) {
            const b = view.max_bounds;
            map.setMaxBounds([[b.south, b.west], [b.north, b.east]]);
        }
    })
    .catch(e => console.error('Error fetching outlet data:', e));

function ask() {
    const q = document.getElementById('search-box').value;
    const results = document.getElementById('search-results');
    results.textContent = '';
    fetch('/api/query?q=' + encodeURIComponent(q))
        .then(r => r.json())
        .then(body => { results.textContent = body.text || body.error; })
        .catch(e => { results.textContent = `Error: ${e.message}. Please try again later.`; });
}

document.getElementById('search-button').addEventListener('click', ask);
document.getElementById('search-box').addEventListener('keypress', e => {
    if (e.key === 'Enter') ask();
});
"#;
