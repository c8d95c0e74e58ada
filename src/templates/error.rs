pub static ERROR_MESSAGE: &'static str = r#"
<div class="error-message">
  <p>{{message}}</p>
</div>
"#;
