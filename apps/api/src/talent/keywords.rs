//! Keyword Extractor: maps free-text requirements onto a fixed technology vocabulary.
//!
//! Pure dictionary lookup: no ranking, no stemming. Output follows vocabulary order.

/// Known technology terms, grouped by domain. Matching is substring-based against the
/// lower-cased requirement text, so every entry here must be lower-case.
#[rustfmt::skip]
pub const VOCABULARY: &[&str] = &[
    // Frontend frameworks
    "react", "react.js", "reactjs", "vue", "vue.js", "angular", "angularjs",
    "svelte", "next.js", "nextjs", "nuxt.js", "nuxtjs", "astro", "remix",
    "solidjs", "ember.js", "backbone.js", "lit", "preact",
    // Mobile
    "react-native", "flutter", "kotlin", "swift", "java-android", "objective-c",
    "ionic", "cordova", "xamarin", "capacitor",
    // Web languages and styling
    "javascript", "js", "typescript", "ts", "html", "html5", "css", "css3",
    "sass", "scss", "less", "tailwind", "bootstrap", "foundation", "material-ui",
    "chakra-ui", "ant-design", "styled-components",
    // Backend languages and frameworks
    "node.js", "nodejs", "express", "fastify", "koa", "nestjs",
    "python", "django", "flask", "fastapi", "pyramid",
    "java", "spring", "spring-boot", "jakarta-ee",
    "go", "golang", "gin", "echo", "fiber",
    "rust", "actix", "rocket",
    "php", "laravel", "symfony", "codeigniter", "cakephp", "yii",
    "ruby", "rails", "sinatra",
    "elixir", "phoenix",
    "c#", ".net", "dotnet", "asp.net", "aspnet",
    "scala", "play-framework", "akka",
    "perl", "haskell", "clojure", "erlang",
    // Data stores
    "postgresql", "postgres", "mysql", "mariadb", "sqlite", "oracle", "sql-server",
    "mongodb", "couchdb", "couchbase", "dynamodb", "redis", "neo4j",
    "elasticsearch", "opensearch", "clickhouse", "firestore", "bigtable",
    "snowflake", "redshift", "tidb", "cockroachdb", "supabase",
    // Cloud
    "aws", "amazon-web-services", "azure", "microsoft-azure", "gcp", "google-cloud",
    "digitalocean", "heroku", "vercel", "netlify", "cloudflare-workers",
    "oracle-cloud", "ibm-cloud", "linode",
    // Infrastructure and delivery
    "docker", "kubernetes", "k8s", "helm", "terraform", "ansible", "pulumi",
    "jenkins", "gitlab-ci", "github-actions", "travis-ci", "circleci",
    "prometheus", "grafana", "elastic-stack", "elk", "logstash", "kibana",
    "consul", "vault", "nomad", "istio", "linkerd",
    "serverless", "lambda", "cloud-functions", "fargate",
    // APIs and formats
    "graphql", "rest", "soap", "grpc", "websockets", "openapi", "swagger",
    "json", "xml", "api-gateway",
    // Machine learning and data science
    "machine-learning", "deep-learning", "ml", "dl", "ai", "artificial-intelligence",
    "tensorflow", "keras", "pytorch", "scikit-learn", "xgboost", "lightgbm",
    "huggingface", "transformers", "langchain", "llama", "openai", "gpt",
    "data-science", "pandas", "numpy", "scipy", "matplotlib", "seaborn",
    "jupyter", "notebook", "colab", "mlflow", "kubeflow", "ray",
    "nlp", "cv", "computer-vision", "speech-to-text", "text-to-speech",
    "reinforcement-learning",
    // Security
    "oauth", "openid", "saml", "jwt", "encryption", "ssl", "tls",
    "penetration-testing", "cybersecurity", "owasp",
    // Blockchain
    "blockchain", "web3", "ethereum", "solidity", "smart-contracts",
    "polygon", "binance-smart-chain", "substrate", "polkadot", "cosmos",
    "bitcoin", "nft", "ipfs", "hardhat", "truffle",
    // Testing
    "jest", "mocha", "chai", "vitest", "cypress", "playwright", "selenium",
    "enzyme", "puppeteer", "karma", "junit", "pytest", "unittest",
    // Tooling and practices
    "git", "github", "gitlab", "bitbucket", "svn",
    "google-analytics", "segment", "mixpanel", "datadog", "newrelic", "sentry",
    "microservices", "monorepo", "nx", "turborepo",
    "rxjs", "d3.js", "three.js", "webgl", "canvas",
    "ci/cd", "devops", "agile", "scrum",
];

/// Returns every vocabulary term found in `text`, in vocabulary order.
///
/// A term matches if it, or the term with its hyphens replaced by spaces, is a
/// substring of the lower-cased text ("machine learning" matches `machine-learning`).
pub fn extract_keywords(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    if lower.trim().is_empty() {
        return vec![];
    }

    let mut keywords: Vec<String> = Vec::new();
    for term in VOCABULARY {
        let matched = lower.contains(term)
            || (term.contains('-') && lower.contains(&term.replace('-', " ")));
        if matched && !keywords.iter().any(|k| k == term) {
            keywords.push(term.to_string());
        }
    }
    keywords
}
