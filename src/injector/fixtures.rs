//! Trimmed-down listing pages used by the injector tests.

pub const ACTIVE_PAGE: &str = r##"
<html>
<head>
    <title>WG-Zimmer in Berlin</title>
    <link rel="canonical" href="https://www.wg-gesucht.de/en/wg-zimmer-in-Berlin-Kreuzberg.6475694.html">
</head>
<body>
<div id="main_content" class="row">
    <div id="main_column" class="col-md-8">
        <div class="panel panel-default">
            <div class="panel-body">
                <div class="noprint showOnGalleryOnly">
                    <h1 id="sliderTopTitle">
                        Nice Room
<span class="gallery-hint">View photos</span></h1>
                </div>
                <div class="row">
                    <div class="col-xs-12">
                        <div class="row">
                            <div class="hidden-xs hidden-sm">
                                <div class="col-md-4">
                                    <div class="row">
                                        <div class="col-md-12"><b>Online:</b> 3 days</div>
                                        <div class="col-md-12"><b>Ad ID:</b>
                                            6475694
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
                <div class="row">
                    <div class="col-sm-4 mb10">
                        <a href="#mapContainer" onclick="loadGMap()">
                            Wrangelstraße 12

                            10997 Berlin Kreuzberg
                        </a>
                    </div>
                </div>
            </div>
        </div>
    </div>
</div>
</body>
</html>
"##;

pub const DEACTIVATED_PAGE: &str = r#"
<html>
<head>
    <link rel="alternate" hreflang="de" href="https://www.wg-gesucht.de/wg-zimmer-in-Berlin-Kreuzberg.6475694.html">
    <link rel="canonical" href="https://www.wg-gesucht.de/en/wg-zimmer-in-Berlin-Kreuzberg.6475694.html">
</head>
<body>
<div id="main_content" class="row">
    <div class="panel panel-deactivated">
        <h3>This listing has been deactivated.</h3>
    </div>
    <h1 id="sliderTopTitle" class="headline headline-detailed-view-title">
        Sunny room in Kreuzberg
    </h1>
</div>
</body>
</html>
"#;

/// Deactivated page with the canonical links and heading text swapped out
pub fn deactivated_page(links: &str, heading: &str) -> String {
    format!(
        r#"<html><head>{links}</head><body>
        <div class="panel panel-deactivated">Deactivated</div>
        <h1 id="sliderTopTitle" class="headline headline-detailed-view-title">{heading}</h1>
        </body></html>"#
    )
}
