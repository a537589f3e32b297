pub fn render_index() -> String {
    INDEX_HTML.replace("{{STYLE}}", STYLE)
}

pub fn render_albums() -> String {
    ALBUMS_HTML.replace("{{STYLE}}", STYLE)
}

const STYLE: &str = r#"
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background-color: var(--bg-1);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    header {
      display: flex;
      flex-wrap: wrap;
      justify-content: space-between;
      align-items: flex-end;
      gap: 12px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.5rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.week {
      color: var(--accent);
    }

    .chart-card {
      background: white;
      border-radius: 20px;
      padding: 16px;
      border: 1px solid rgba(47, 72, 88, 0.08);
    }

    #chart {
      width: 100%;
      height: 300px;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke-width: 2;
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-label {
      fill: #7a746d;
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      font-size: 0.85rem;
    }

    .legend span::before {
      content: '';
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 50%;
      margin-right: 6px;
      background: var(--swatch);
    }

    .album {
      background: white;
      border-radius: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      overflow: hidden;
    }

    .album-header {
      padding: 16px 18px;
      font-weight: 600;
      cursor: pointer;
    }

    .album-content {
      display: none;
      padding: 0 18px 16px;
    }

    .track-row {
      display: grid;
      grid-template-columns: 1fr 60px 60px;
      gap: 8px;
      padding: 6px 0;
      border-top: 1px solid rgba(47, 72, 88, 0.08);
    }

    .diff-up {
      color: #2d7a4b;
    }

    .diff-down {
      color: #c63b2b;
    }

    .diff-same {
      color: #7a746d;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
"#;

const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>View Tracker</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>View Tracker</h1>
        <p class="subtitle" id="last-updated">Loading...</p>
      </div>
      <label class="subtitle">Background <input type="color" id="bg-color" value="#f8f3e6" /></label>
    </header>

    <section class="panel" id="videos"></section>

    <section class="chart-card">
      <svg id="chart" viewBox="0 0 720 300" aria-label="Daily views" role="img"></svg>
      <div class="legend" id="legend"></div>
    </section>

    <div class="status" id="status"></div>
    <p class="subtitle"><a href="/albums">Track popularity by album</a></p>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const videosEl = document.getElementById('videos');
    const updatedEl = document.getElementById('last-updated');
    const chartEl = document.getElementById('chart');
    const legendEl = document.getElementById('legend');
    const colors = ['#ff6b4a', '#2f4858', '#2d7a4b', '#b5838d', '#e9c46a', '#6d597a', '#219ebc'];

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const escapeHtml = (text) => String(text).replace(/[&<>"']/g, (c) => `&#${c.charCodeAt(0)};`);

    const renderSummary = (summary) => {
      updatedEl.textContent = `Last updated: ${summary.last_updated} (week from ${summary.window_start})`;
      videosEl.innerHTML = summary.series
        .map((video) => `
          <div class="stat">
            <span class="label">${escapeHtml(video.title)}</span>
            <span class="value week">${video.views_this_week.toLocaleString()}</span>
            <span class="subtitle">this week &middot; ${video.views_total.toLocaleString()} total</span>
          </div>`)
        .join('');
    };

    const renderChart = (chart) => {
      const width = 720;
      const height = 300;
      const padX = 56;
      const padY = 34;
      const top = 20;
      const values = chart.datasets.flatMap((set) => set.data);
      const max = Math.max(1, ...values);
      const count = chart.labels.length;
      const xStep = count > 1 ? (width - padX * 2) / (count - 1) : 0;
      const x = (i) => padX + i * xStep;
      const y = (v) => height - padY - (v / max) * (height - top - padY);

      let grid = '';
      for (let i = 0; i <= 4; i += 1) {
        const value = (max * i) / 4;
        grid += `<line class="chart-grid" x1="${padX}" y1="${y(value)}" x2="${width - padX}" y2="${y(value)}" />`;
        grid += `<text class="chart-label" x="${padX - 8}" y="${y(value) + 4}" text-anchor="end">${Math.round(value).toLocaleString()}</text>`;
      }

      const every = count > 10 ? Math.ceil(count / 10) : 1;
      const labels = chart.labels
        .map((label, i) => (i % every === 0
          ? `<text class="chart-label" x="${x(i)}" y="${height - padY + 18}" text-anchor="middle">${label}</text>`
          : ''))
        .join('');

      const lines = chart.datasets
        .map((set, n) => {
          const d = set.data.map((v, i) => `${i === 0 ? 'M' : 'L'} ${x(i).toFixed(2)} ${y(v).toFixed(2)}`).join(' ');
          return `<path class="chart-line" stroke="${colors[n % colors.length]}" d="${d}" />`;
        })
        .join('');

      chartEl.innerHTML = `${grid}${lines}${labels}`;
      legendEl.innerHTML = chart.datasets
        .map((set, n) => `<span style="--swatch: ${colors[n % colors.length]}">${escapeHtml(set.label)}</span>`)
        .join('');
    };

    const load = async () => {
      const [summaryRes, chartRes] = await Promise.all([fetch('/api/summary'), fetch('/api/chart')]);
      if (!summaryRes.ok || !chartRes.ok) {
        throw new Error('Failed to load data.');
      }
      renderSummary(await summaryRes.json());
      renderChart(await chartRes.json());
    };

    document.getElementById('bg-color').addEventListener('input', (event) => {
      document.body.style.backgroundColor = event.target.value;
    });

    load().catch((err) => {
      updatedEl.textContent = '';
      setStatus(err.message, 'error');
    });
  </script>
</body>
</html>
"##;

const ALBUMS_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Track Popularity</title>
  <style>{{STYLE}}</style>
</head>
<body>
  <main class="app">
    <header>
      <div>
        <h1>Track Popularity</h1>
        <p class="subtitle" id="updated">Loading...</p>
      </div>
      <a class="subtitle" href="/">Views dashboard</a>
    </header>

    <section id="albums" class="panel"></section>
    <div class="status" id="status"></div>
  </main>

  <script>
    const albumsEl = document.getElementById('albums');
    const statusEl = document.getElementById('status');

    const escapeHtml = (text) => String(text).replace(/[&<>"']/g, (c) => `&#${c.charCodeAt(0)};`);

    const renderTrack = (track) => {
      const link = track.url
        ? `<a href="${escapeHtml(track.url)}" target="_blank" rel="noopener">${escapeHtml(track.title)}</a>`
        : `<span>${escapeHtml(track.title)}</span>`;
      const score = track.popularity === null ? '--' : track.popularity;
      return `<div class="track-row">${link}<span>${score}</span><span class="diff-${track.trend}">${track.delta_text}</span></div>`;
    };

    const renderAlbums = (data) => {
      document.getElementById('updated').textContent = `Updated: ${data.updated_at}`;
      albumsEl.innerHTML = '';
      data.albums.forEach((album) => {
        const box = document.createElement('div');
        box.className = 'album';
        box.innerHTML = `
          <div class="album-header">${escapeHtml(album.name)}</div>
          <div class="album-content">${album.tracks.map(renderTrack).join('')}</div>`;
        const content = box.querySelector('.album-content');
        box.querySelector('.album-header').addEventListener('click', () => {
          content.style.display = content.style.display === 'block' ? 'none' : 'block';
        });
        albumsEl.appendChild(box);
      });
    };

    fetch('/api/albums')
      .then((res) => {
        if (!res.ok) {
          throw new Error('Failed to load popularity data.');
        }
        return res.json();
      })
      .then(renderAlbums)
      .catch((err) => {
        statusEl.textContent = err.message;
        statusEl.dataset.type = 'error';
      });
  </script>
</body>
</html>
"#;
