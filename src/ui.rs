pub fn render_page(calendar: &str) -> String {
    PAGE_HTML.replace("{{CALENDAR}}", calendar)
}

const PAGE_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Contribution Calendar</title>
  <style>
    :root {
      --bg: #f6f8fa;
      --ink: #1f2328;
      --muted: #656d76;
      --card: #ffffff;
      --level-0: #ebedf0;
      --level-1: #9be9a8;
      --level-2: #40c463;
      --level-3: #30a14e;
      --level-4: #216e39;
      --cell: 11px;
      --gap: 3px;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", "Helvetica Neue", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    .app {
      background: var(--card);
      border: 1px solid #d0d7de;
      border-radius: 8px;
      padding: 24px;
      display: grid;
      gap: 16px;
      overflow-x: auto;
    }

    h1 {
      margin: 0;
      font-size: 1.1rem;
      font-weight: 600;
    }

    .calendar {
      display: grid;
      gap: 8px;
      position: relative;
    }

    .months {
      display: grid;
      grid-template-columns: repeat(12, 1fr);
      list-style: none;
      margin: 0;
      padding: 0;
      font-size: 12px;
      color: var(--muted);
    }

    .squares {
      display: grid;
      grid-template-rows: repeat(7, var(--cell));
      grid-auto-flow: column;
      grid-auto-columns: var(--cell);
      gap: var(--gap);
      list-style: none;
      margin: 0;
      padding: 0;
    }

    .square {
      position: relative;
      width: var(--cell);
      height: var(--cell);
      border-radius: 2px;
      background: var(--level-0);
      cursor: pointer;
    }

    .square[data-color="1"] { background: var(--level-1); }
    .square[data-color="2"] { background: var(--level-2); }
    .square[data-color="3"] { background: var(--level-3); }
    .square[data-color="4"] { background: var(--level-4); }

    .square:focus-visible {
      outline: 2px solid #0969da;
      outline-offset: 1px;
    }

    .tooltip {
      position: absolute;
      bottom: calc(100% + 8px);
      left: 50%;
      transform: translateX(-50%);
      z-index: 10;
      background: #24292f;
      color: white;
      border-radius: 6px;
      padding: 6px 10px;
      white-space: nowrap;
      font-size: 12px;
      pointer-events: none;
    }

    .tooltip__text {
      margin: 0;
      font-weight: 600;
    }

    .tooltip__date {
      display: block;
      color: #d0d7de;
    }

    .loader {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .examples {
      display: flex;
      align-items: center;
      justify-content: flex-end;
      gap: 6px;
      font-size: 12px;
      color: var(--muted);
    }

    .examples__list {
      display: flex;
      gap: var(--gap);
      list-style: none;
      margin: 0;
      padding: 0;
    }
  </style>
</head>
<body>
  <main class="app">
    <h1>Contributions in the last year</h1>
    {{CALENDAR}}
  </main>

  <script>
    const choose = (square) => {
      const next = square.dataset.date
        ? `?date=${square.dataset.date}`
        : `?level=${square.dataset.color}`;
      if (window.location.search !== next) {
        window.location.search = next;
      }
    };

    document.addEventListener('click', (event) => {
      const square = event.target.closest('.square');
      if (square) {
        choose(square);
      } else if (document.querySelector('.tooltip')) {
        window.location.href = window.location.pathname;
      }
    });

    document.addEventListener('keydown', (event) => {
      const square = event.target.closest && event.target.closest('.square');
      if (square && (event.key === 'Enter' || event.key === ' ')) {
        event.preventDefault();
        choose(square);
      }
    });

    const active = document.querySelector('.tooltip');
    if (active) {
      active.parentElement.focus();
    }
  </script>
</body>
</html>
"#;
