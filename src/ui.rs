pub fn render_index(total_orders: usize) -> String {
    INDEX_HTML.replace("{{ORDERS}}", &total_orders.to_string())
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Dealer Dashboard</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #eef3f8;
      --bg-2: #cfe0f2;
      --ink: #22303c;
      --accent: #2563eb;
      --accent-warm: #f59e0b;
      --accent-bad: #dc2626;
      --accent-good: #16a34a;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(34, 48, 60, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top right, var(--bg-2), transparent 55%),
        linear-gradient(135deg, var(--bg-1), #f6f9fc 60%, #eef3f8 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
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
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5b6b7a;
      font-size: 1rem;
    }

    .cards {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(34, 48, 60, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #7c8794;
    }

    .stat .value {
      font-size: 1.6rem;
      font-weight: 600;
      color: var(--ink);
    }

    .stat .value.revenue {
      color: var(--accent);
    }

    .stat .hint {
      font-size: 0.85rem;
      color: #8b95a1;
    }

    .columns {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
      gap: 20px;
      align-items: start;
    }

    .panel {
      background: white;
      border-radius: 20px;
      padding: 20px;
      border: 1px solid rgba(34, 48, 60, 0.08);
      display: grid;
      gap: 14px;
    }

    .panel h2 {
      margin: 0;
      font-size: 1.15rem;
    }

    .bar-row {
      display: grid;
      gap: 6px;
    }

    .bar-meta {
      display: flex;
      justify-content: space-between;
      font-size: 0.9rem;
    }

    .bar-meta .count {
      color: #7c8794;
    }

    .bar-track {
      height: 10px;
      border-radius: 999px;
      background: rgba(34, 48, 60, 0.08);
      overflow: hidden;
    }

    .bar-fill {
      height: 100%;
      border-radius: 999px;
      background: var(--accent);
      transition: width 300ms ease;
    }

    .bar-fill.status-pending { background: var(--accent-warm); }
    .bar-fill.status-completed { background: var(--accent-good); }
    .bar-fill.status-delivered { background: var(--accent-good); }
    .bar-fill.status-cancelled { background: var(--accent-bad); }
    .bar-fill.status-rejected { background: var(--accent-bad); }

    .activity {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    .activity li {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      font-size: 0.92rem;
      border-bottom: 1px dashed rgba(34, 48, 60, 0.12);
      padding-bottom: 8px;
    }

    .activity .when {
      color: #8b95a1;
      white-space: nowrap;
    }

    .badge {
      display: inline-block;
      padding: 2px 10px;
      border-radius: 999px;
      font-size: 0.78rem;
      background: rgba(37, 99, 235, 0.12);
      color: var(--accent);
      text-transform: capitalize;
    }

    .badge.status-completed, .badge.status-delivered {
      background: rgba(22, 163, 74, 0.12);
      color: var(--accent-good);
    }

    .badge.status-cancelled, .badge.status-rejected {
      background: rgba(220, 38, 38, 0.12);
      color: var(--accent-bad);
    }

    .badge.status-pending {
      background: rgba(245, 158, 11, 0.14);
      color: #b45309;
    }

    .empty {
      color: #8b95a1;
      font-size: 0.92rem;
    }

    .status-line {
      font-size: 0.95rem;
      color: #5b6b7a;
      min-height: 1.2em;
    }

    .status-line[data-type="error"] {
      color: var(--accent-bad);
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Dealer Dashboard</h1>
      <p class="subtitle">Order statistics across {{ORDERS}} recorded orders.</p>
    </header>

    <section class="cards">
      <div class="stat">
        <span class="label">Total orders</span>
        <span id="total-orders" class="value">{{ORDERS}}</span>
        <span id="window-hint" class="hint"></span>
      </div>
      <div class="stat">
        <span class="label">Revenue</span>
        <span id="total-revenue" class="value revenue">0</span>
        <span id="aov-hint" class="hint"></span>
      </div>
      <div class="stat">
        <span class="label">Customers</span>
        <span id="total-customers" class="value">0</span>
        <span id="products-hint" class="hint"></span>
      </div>
      <div class="stat">
        <span class="label">Pending</span>
        <span id="pending-orders" class="value">0</span>
        <span id="outcome-hint" class="hint"></span>
      </div>
    </section>

    <section class="columns">
      <div class="panel">
        <h2>Order status</h2>
        <div id="status-bars"></div>
      </div>
      <div class="panel">
        <h2>Top payment methods</h2>
        <div id="payment-bars"></div>
      </div>
      <div class="panel">
        <h2>Recent activity</h2>
        <ul id="activity" class="activity"></ul>
      </div>
    </section>

    <div class="status-line" id="status-line"></div>
  </main>

  <script>
    const statusLine = document.getElementById('status-line');

    const setStatus = (message, type) => {
      statusLine.textContent = message;
      statusLine.dataset.type = type || '';
    };

    const formatMoney = (value) => {
      if (typeof value !== 'number' || Number.isNaN(value)) {
        return '--';
      }
      return '₹' + Math.round(value).toLocaleString('en-IN');
    };

    const renderBars = (container, rows, labelKey, statusClasses) => {
      if (!rows.length) {
        container.innerHTML = '<p class="empty">No data yet.</p>';
        return;
      }
      container.innerHTML = rows
        .map((row) => {
          const label = row[labelKey];
          const cls = statusClasses ? ` status-${label}` : '';
          const width = Math.min(Math.max(row.percentage, 0), 100);
          return `
            <div class="bar-row">
              <div class="bar-meta">
                <span>${label}</span>
                <span class="count">${row.count} · ${row.percentage}%</span>
              </div>
              <div class="bar-track">
                <div class="bar-fill${cls}" style="width: ${width}%"></div>
              </div>
            </div>`;
        })
        .join('');
    };

    const renderActivity = (items) => {
      const list = document.getElementById('activity');
      if (!items.length) {
        list.innerHTML = '<li><span class="empty">Nothing recent.</span></li>';
        return;
      }
      list.innerHTML = items
        .map((item) => `
          <li>
            <span>${item.customer} <span class="badge status-${item.status}">${item.status}</span></span>
            <span class="when">${item.orderDate.slice(0, 10)}</span>
          </li>`)
        .join('');
    };

    const renderStats = (stats) => {
      document.getElementById('total-orders').textContent = stats.totalOrders;
      document.getElementById('total-revenue').textContent = formatMoney(stats.totalRevenue);
      document.getElementById('total-customers').textContent = stats.totalCustomers;
      document.getElementById('pending-orders').textContent = stats.pendingOrders;
      document.getElementById('window-hint').textContent =
        `${stats.ordersToday} today · ${stats.ordersThisWeek} this week · ${stats.ordersThisMonth} this month`;
      document.getElementById('aov-hint').textContent =
        `Avg order ${formatMoney(stats.averageOrderValue)}`;
      document.getElementById('products-hint').textContent =
        `${stats.totalProducts} units sold`;
      document.getElementById('outcome-hint').textContent =
        `${stats.completedOrders} completed · ${stats.cancelledOrders} cancelled`;

      renderBars(document.getElementById('status-bars'), stats.orderStatusDistribution, 'status', true);
      renderBars(document.getElementById('payment-bars'), stats.topPaymentMethods, 'method', false);
      renderActivity(stats.recentActivity);
    };

    const loadStats = async () => {
      const res = await fetch('/api/stats');
      if (!res.ok) {
        throw new Error('Unable to load statistics');
      }
      renderStats(await res.json());
    };

    loadStats().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
