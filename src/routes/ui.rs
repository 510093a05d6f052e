use axum::{response::Html, routing::get, Router};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>job-lens</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem; color: #1d1d1f; }
    .controls { display: flex; flex-wrap: wrap; gap: 0.75rem; margin: 1rem 0; }
    .job-card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    .job-card h3 { margin: 0 0 0.5rem 0; }
    #errorDisplay { display: none; color: #b91c1c; background: #fee2e2; padding: 0.75rem; border-radius: 6px; }
  </style>
</head>
<body>
  <h1>job-lens</h1>

  <div class="controls">
    <input id="jsonFileInput" type="file" accept=".json,application/json" />
    <button id="loadDataBtn">Load</button>
  </div>

  <div class="controls">
    <select id="levelFilter"><option value="">All Levels</option></select>
    <select id="typeFilter"><option value="">All Types</option></select>
    <select id="skillFilter"><option value="">All Skills</option></select>
    <select id="sortTitle">
      <option value="">Sort by title</option>
      <option value="asc">Title A-Z</option>
      <option value="desc">Title Z-A</option>
    </select>
    <select id="sortPostedTime">
      <option value="">Sort by posted time</option>
      <option value="newest">Newest first</option>
      <option value="oldest">Oldest first</option>
    </select>
  </div>

  <div id="errorDisplay"></div>
  <div id="jobListings"></div>

  <script>
    const el = (id) => document.getElementById(id);
    const fileInput = el('jsonFileInput');
    const errorDisplay = el('errorDisplay');
    const jobListings = el('jobListings');
    const controls = ['levelFilter', 'typeFilter', 'skillFilter', 'sortTitle', 'sortPostedTime'].map(el);

    function apply(view, rebuildOptions) {
      errorDisplay.textContent = view.error || '';
      errorDisplay.style.display = view.error ? 'block' : 'none';
      jobListings.innerHTML = view.list_html;
      if (rebuildOptions) {
        el('levelFilter').innerHTML = view.options.levels_html;
        el('typeFilter').innerHTML = view.options.types_html;
        el('skillFilter').innerHTML = view.options.skills_html;
      }
    }

    function showError(message) {
      errorDisplay.textContent = message;
      errorDisplay.style.display = 'block';
      jobListings.innerHTML = '';
    }

    async function request(url, init, rebuildOptions) {
      try {
        const res = await fetch(url, init);
        if (!res.ok) {
          showError('Error reading file.');
          return;
        }
        apply(await res.json(), rebuildOptions);
      } catch (err) {
        showError('Error reading file.');
      }
    }

    function load(query, body) {
      return request('/api/jobs/load' + query, { method: 'POST', body: body || '' }, true);
    }

    el('loadDataBtn').addEventListener('click', () => {
      const file = fileInput.files[0];
      if (!file) {
        load('');
        return;
      }
      const name = '?file=' + encodeURIComponent(file.name);
      const reader = new FileReader();
      reader.onload = (e) => load(name, e.target.result);
      reader.onerror = () => load(name + '&read_error=true');
      reader.readAsText(file);
    });

    async function refresh() {
      const params = new URLSearchParams({
        level: el('levelFilter').value,
        type: el('typeFilter').value,
        skill: el('skillFilter').value,
        sort_title: el('sortTitle').value,
        sort_posted: el('sortPostedTime').value,
      });
      await request('/api/jobs?' + params.toString(), undefined, false);
    }

    controls.forEach((control) => control.addEventListener('change', refresh));
  </script>
</body>
</html>"#)
}
