use axum::response::{Html, IntoResponse};

// Serve the embedded studio page
pub async fn serve_index() -> impl IntoResponse {
    let html = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>artqr - QR Studio</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, 'Open Sans', 'Helvetica Neue', sans-serif;
            max-width: 800px;
            margin: 0 auto;
            padding: 20px;
            color: #333;
        }
        h1 {
            color: #2c3e50;
            text-align: center;
        }
        .container {
            display: flex;
            flex-direction: column;
            gap: 20px;
        }
        .card {
            border: 1px solid #ddd;
            border-radius: 8px;
            padding: 20px;
            box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
        }
        .form-row {
            display: flex;
            align-items: center;
            gap: 10px;
            margin-bottom: 12px;
        }
        .form-row label {
            min-width: 140px;
        }
        .form-row input[type="text"] {
            flex: 1;
            padding: 6px 8px;
            border: 1px solid #ccc;
            border-radius: 4px;
        }
        .preview {
            text-align: center;
            background-image: linear-gradient(45deg, #eee 25%, transparent 25%, transparent 75%, #eee 75%),
                              linear-gradient(45deg, #eee 25%, transparent 25%, transparent 75%, #eee 75%);
            background-size: 20px 20px;
            background-position: 0 0, 10px 10px;
            border-radius: 8px;
            padding: 10px;
        }
        .preview img {
            max-width: 320px;
            width: 100%;
        }
        .button {
            background-color: #3498db;
            color: white;
            border: none;
            padding: 10px 15px;
            border-radius: 4px;
            cursor: pointer;
            font-size: 16px;
            text-decoration: none;
            display: inline-block;
        }
        .button:hover {
            background-color: #2980b9;
        }
        .downloads {
            display: flex;
            gap: 10px;
            justify-content: center;
        }
        .server-info {
            text-align: center;
            color: #666;
            font-size: 14px;
        }
    </style>
</head>
<body>
    <h1>QR Studio</h1>

    <div class="container">
        <div class="card">
            <h2>Styling</h2>
            <div class="form-row">
                <label for="url">URL</label>
                <input type="text" id="url" value="https://artbeaurescence.sn">
            </div>
            <div class="form-row">
                <label for="start">Gradient start</label>
                <input type="color" id="start" value="#1d2b64">
            </div>
            <div class="form-row">
                <label for="end">Gradient end</label>
                <input type="color" id="end" value="#f8cdda">
            </div>
            <div class="form-row">
                <label for="quiet-zone">Quiet zone (modules)</label>
                <input type="number" id="quiet-zone" value="4" min="0" max="16">
            </div>
            <div class="form-row">
                <label for="logo">Logo overlay</label>
                <input type="checkbox" id="logo" checked>
            </div>
            <button type="button" class="button" id="generate">Generate preview</button>
        </div>

        <div class="card">
            <h2>Preview</h2>
            <div class="preview">
                <img id="preview-image" alt="QR code preview">
            </div>
        </div>

        <div class="card">
            <h2>Download</h2>
            <div class="downloads">
                <a class="button" id="download-png" download>PNG</a>
                <a class="button" id="download-jpg" download>JPEG</a>
                <a class="button" id="download-pdf" download>PDF</a>
            </div>
        </div>

        <div class="server-info" id="server-info"></div>
    </div>

    <script>
        function styleQuery() {
            const params = new URLSearchParams({
                url: document.getElementById('url').value,
                start: document.getElementById('start').value,
                end: document.getElementById('end').value,
                quiet_zone: document.getElementById('quiet-zone').value,
                logo: document.getElementById('logo').checked,
            });
            return params.toString();
        }

        function refresh() {
            const query = styleQuery();
            document.getElementById('preview-image').src = '/api/qr/preview?' + query;
            document.getElementById('download-png').href = '/api/qr/download/png?' + query;
            document.getElementById('download-jpg').href = '/api/qr/download/jpg?' + query;
            document.getElementById('download-pdf').href = '/api/qr/download/pdf?' + query;
        }

        async function loadServerInfo() {
            try {
                const response = await fetch('/api/server');
                const server = await response.json();
                document.getElementById('server-info').textContent =
                    `${server.name} (${server.os}) - ${server.ip}:${server.port}`;
            } catch (error) {
                console.error('Error loading server info:', error);
            }
        }

        document.addEventListener('DOMContentLoaded', () => {
            document.getElementById('generate').addEventListener('click', refresh);
            for (const id of ['url', 'start', 'end', 'quiet-zone', 'logo']) {
                document.getElementById(id).addEventListener('change', refresh);
            }
            refresh();
            loadServerInfo();
        });
    </script>
</body>
</html>"##;

    Html(html)
}
